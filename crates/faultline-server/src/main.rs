//! faultline service binary.
//!
//! Serves `/`, `/slow`, `/random`, `/load`, `/crash` and `/metrics` on
//! `0.0.0.0:5050`.

use tracing_subscriber::{fmt, EnvFilter};

use faultline_core::error::Result;
use faultline_server::{app_state::AppState, config::ServiceConfig, server::Server, services};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = ServiceConfig::default();
    let listen = cfg.listen;

    let state = AppState::new(cfg)?;
    let routes = services::builtin_routes(&state)?;
    let server = Server::new(routes);

    tracing::info!(%listen, "faultline starting");
    server.serve(listen).await?;
    Ok(())
}
