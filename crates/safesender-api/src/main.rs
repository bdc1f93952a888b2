use safesender_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, services, routes)
    let (state, router) = safesender_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    safesender_api::setup::server::start_server(&config, router, state.shutdown.clone()).await?;

    Ok(())
}
