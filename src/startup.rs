use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::EligibilityPolicy;
use crate::routes::{health_check, index, json_error_handler, loan_eligibility};
use crate::telemetry::RequestSpanBuilder;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(configuration.application.address())?;
        let port = listener.local_addr()?.port();
        let server = run_server(listener, configuration.eligibility)?;

        Ok(Self { port, server })
    }

    /// The bound port; differs from the configured one when that was `0`.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run_server(
    listener: TcpListener,
    policy: EligibilityPolicy,
) -> Result<Server, std::io::Error> {
    let policy = web::Data::new(policy);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<RequestSpanBuilder>::new())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/", web::get().to(index))
            .route("/health_check", web::get().to(health_check))
            .route("/loan_eligibility", web::post().to(loan_eligibility))
            .app_data(policy.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
