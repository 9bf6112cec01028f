use loan_eligibility::configuration::get_configuration;
use loan_eligibility::startup::Application;
use loan_eligibility::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("loan-eligibility".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration)?;
    tracing::info!(port = application.port(), "Serving loan eligibility requests");

    application.run_until_stopped().await?;
    Ok(())
}
