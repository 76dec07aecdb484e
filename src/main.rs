use std::env;
use std::net::SocketAddr;

use compensation_engine::api::{AppState, create_router};
use compensation_engine::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/compensation";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("COMPENSATION_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, config_dir = %config_dir, "failed to load configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        name = %config.metadata().name,
        version = %config.metadata().version,
        rate_files = config.config().rates().len(),
        "configuration loaded"
    );

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = create_router(AppState::new(config));

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to bind on {addr}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
