use dropgate_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    dropgate_api::telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (clients, services, routes)
    let (_state, router) = dropgate_api::setup::initialize_app(config.clone())?;

    // Start the server
    dropgate_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
