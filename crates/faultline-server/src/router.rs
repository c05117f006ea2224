//! Axum router wiring.
//!
//! Axum only provides the HTTP plumbing; every request goes to the fallback,
//! which does exact-path lookup in the route table.

use std::sync::Arc;

use axum::Router;

use crate::dispatch::{dispatch, RouteTable};

pub fn build_router(routes: Arc<RouteTable>) -> Router {
    Router::new().fallback(dispatch).with_state(routes)
}
