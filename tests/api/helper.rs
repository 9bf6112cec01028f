use loan_eligibility::configuration::get_configuration;
use loan_eligibility::domain::EligibilityPolicy;
use loan_eligibility::startup::Application;
use loan_eligibility::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;

// Logs are discarded unless `TEST_LOG` is set, e.g.
// `TEST_LOG=true cargo test | bunyan`.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_loan_eligibility(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/loan_eligibility", &self.address))
            .json(body)
            .send()
            .await
            .expect("fail to execute request")
    }

    pub async fn eligibility_of(&self, body: serde_json::Value) -> bool {
        let resp = self.post_loan_eligibility(&body).await;
        assert_eq!(resp.status().as_u16(), 200, "payload was {}", body);

        let json: serde_json::Value = resp.json().await.expect("fail to parse response body");
        json["eligible"]
            .as_bool()
            .expect("`eligible` is missing or not a boolean")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_policy(EligibilityPolicy::default()).await
}

pub async fn spawn_app_with_policy(policy: EligibilityPolicy) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("fail to read configuration");
        c.application.port = 0;
        c.eligibility = policy;
        c
    };

    let application = Application::build(configuration).expect("fail to build application");
    let port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        port,
        api_client: reqwest::Client::new(),
    }
}
