use tracing_subscriber::EnvFilter;

use checkmate_mcp::ToolRegistry;
use checkmate_server::app_state::AppState;
use checkmate_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        validator = config.validator.program(),
        timeout = ?config.validator.timeout(),
        "using schema validator"
    );

    let state = AppState::new(ToolRegistry::standard(config.validator.clone()));
    let app = checkmate_server::router::create_router(state);

    let addr = config.addr();
    tracing::info!("Checkmate server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
