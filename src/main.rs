use cinema_pricing::api::{AppState, create_router};
use cinema_pricing::calculation::PricingEngine;
use cinema_pricing::config::{ConfigLoader, PricingConfig, ServerSettings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_pricing=info".into()),
        )
        .init();

    let settings = ServerSettings::from_env()?;

    let config = match &settings.config_path {
        Some(path) => {
            info!(path = %path.display(), "Loading pricing configuration");
            ConfigLoader::load(path)?.into_config()
        }
        None => {
            info!("No pricing file configured, using built-in prices");
            PricingConfig::default()
        }
    };
    info!(
        ticket_types = config.ticket_prices().len(),
        weekend_days = config.weekend_days().len(),
        "Pricing configuration ready"
    );

    let app = create_router(AppState::new(PricingEngine::new(config)));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "cinema-pricing listening");
    axum::serve(listener, app).await?;

    Ok(())
}
