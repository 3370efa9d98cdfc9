//! Shift pay HTTP server.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PAY_RULES_PATH`: Pay rules YAML file (default: built-in rule table)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use shift_pay_engine::api::{AppState, create_router};
use shift_pay_engine::config::{ConfigLoader, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    info!("Starting shift pay server");

    let server_config = ServerConfig::from_env()?;
    let config = ConfigLoader::load_or_default(server_config.pay_rules_path.as_ref())?;
    info!(rules_version = %config.rules().version, "Pay rules ready");

    let app = create_router(AppState::new(config));

    let addr = server_config.socket_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
