use outdone::configuration::get_configuration;
use outdone::startup::build;
use outdone::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("outdone".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_configuration()?;
    let app = build(config)?;
    app.run().await?;

    Ok(())
}
