//! Built-in handlers.
//!
//! Everything except `/metrics` counts itself in `web_requests_total` before
//! doing its work.

pub mod hello;
pub mod load;
pub mod metrics;
pub mod random_failure;
pub mod slow;

use std::sync::Arc;

use faultline_core::error::Result;

use crate::app_state::AppState;
use crate::dispatch::RouteTable;
use crate::fault::CrashHandler;

pub use hello::HelloHandler;
pub use load::LoadHandler;
pub use metrics::MetricsHandler;
pub use random_failure::RandomFailureHandler;
pub use slow::SlowHandler;

/// Route table with every built-in handler bound.
pub fn builtin_routes(state: &AppState) -> Result<RouteTable> {
    let cfg = state.cfg();
    let routes = RouteTable::new();

    routes.add_route("/", Arc::new(HelloHandler::new(state.requests())))?;
    routes.add_route(
        "/slow",
        Arc::new(SlowHandler::new(
            state.requests(),
            state.random(),
            cfg.slow_min_ms,
            cfg.slow_max_ms,
        )),
    )?;
    routes.add_route(
        "/random",
        Arc::new(RandomFailureHandler::new(
            state.requests(),
            state.random(),
            cfg.failure_rate,
        )),
    )?;
    routes.add_route(
        "/load",
        Arc::new(LoadHandler::new(state.requests(), cfg.load_iterations)),
    )?;
    routes.add_route("/metrics", Arc::new(MetricsHandler::new(state.registry())))?;

    if cfg.fault_injection {
        routes.add_route("/crash", Arc::new(CrashHandler::new()))?;
        tracing::warn!("fault injection enabled: GET /crash terminates the process");
    }

    Ok(routes)
}
