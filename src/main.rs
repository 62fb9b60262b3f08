use postgenai::{logger, server, Config, UpstreamServices};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    logger::init_with_config(logger::LoggerConfig::from_app_config(&config))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &config);
    logger::log_config_info(&config);

    let services = match UpstreamServices::from_config(&config) {
        Ok(services) => services,
        Err(e) => {
            log::error!("❌ Failed to initialize upstream clients: {}", e);
            return Err(e.into());
        }
    };

    server::run(config, services).await?;

    log::info!("👋 Server stopped");
    Ok(())
}
