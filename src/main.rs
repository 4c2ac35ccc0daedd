use std::sync::Arc;

use anyhow::Context;
use hotel_signup::configuration::get_configuration;
use hotel_signup::startup::Application;
use hotel_signup::surface::ConsoleSurface;
use hotel_signup::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let subscriber = get_subscriber("hotel_signup".into(), "info".to_string(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to get configuration")?;
    let surface = Arc::new(ConsoleSurface::new(configuration.application.idle_label.clone()));

    let application = Application::build(configuration, surface);
    application.run_until_stopped().await?;
    Ok(())
}
