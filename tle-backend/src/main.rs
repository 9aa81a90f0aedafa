use tle_backend::config::{BackendConfig, DEFAULT_CONFIG_PATH};
use tle_backend::module::tle::Catalog;
use tle_backend::service::{self, AppState};

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let (config, found) = BackendConfig::load_or_default(&config_path)?;

    // Initialize logging
    let _logging_guard = tle_backend::logging::init_logging(
        &config.log_dir,
        env!("CARGO_PKG_NAME"),
        &config.log_level,
        config.log_retention_days,
    )?;

    tracing::info!("TLE backend starting...");
    if found {
        tracing::info!("Loaded configuration from {}", config_path);
    } else {
        tracing::info!("No config file at {}, using defaults", config_path);
    }
    tracing::debug!("Configuration: {:?}", config);

    let state = AppState::new(Catalog::builtin()?);
    tracing::info!("Catalog loaded with {} satellites", state.catalog().len());

    let app = service::build_router(state, &config);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);
    if config.enable_cors {
        tracing::info!("CORS enabled for all origins");
    }

    axum::serve(listener, app).await?;

    Ok(())
}
