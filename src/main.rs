use campusdesk::campusdesk_config::ServerConfig;
use campusdesk::logging::init_tracing;
use campusdesk::metrics::{init_metrics, metrics_app};
use campusdesk::router::init_router;
use campusdesk::state::init_app_state;
use dotenvy::dotenv;
use tracing::{info, warn};

const DEFAULT_METRICS_PORT: u16 = 9000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let state = init_app_state().await?;
    info!(
        selection_mode = %state.portal_config.selection_mode,
        "Portal state initialized"
    );

    if let Some(handle) = init_metrics()? {
        let port = std::env::var("METRICS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_METRICS_PORT);
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!(port, "Metrics server listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                warn!(error = %e, "Metrics server stopped");
            }
        });
    }

    let server = ServerConfig::from_env();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server.address()).await?;
    info!(address = %server.address(), "🚀 Server running");
    info!("📖 Scalar UI available at http://{}/scalar", server.address());

    axum::serve(listener, app).await?;
    Ok(())
}
