use trademedia_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage backend, routes)
    let (state, router) = trademedia_api::setup::initialize_app(config).await?;

    // Start the server
    trademedia_api::setup::server::start_server(&state.config, router).await?;

    Ok(())
}
