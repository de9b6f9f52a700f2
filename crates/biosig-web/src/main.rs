//! Space Biosignatures Reference web server.
//!
//! Run with: cargo run -p biosig-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use biosig_web::config::Config;
use biosig_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting Space Biosignatures Reference...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let state = AppState::new()?;
    info!(
        "Catalog ready: {} biosignatures across {} types",
        state.catalog.len(),
        state.catalog.categories().len()
    );

    let app = biosig_web::router::build_router(state, &config.server.static_dir);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
