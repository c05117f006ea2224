//! Startup-time validation: routes, counters, config.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use faultline_core::error::{ClientCode, FaultlineError};
use faultline_server::app_state::{AppState, REQUESTS_TOTAL};
use faultline_server::config::ServiceConfig;
use faultline_server::dispatch::RouteTable;
use faultline_server::services::{HelloHandler, MetricsHandler};

#[test]
fn duplicate_route_conflicts() {
    let state = AppState::new(ServiceConfig::default()).unwrap();
    let routes = RouteTable::new();
    routes.add_route("/", Arc::new(HelloHandler::new(state.requests()))).unwrap();

    let err = routes
        .add_route("/", Arc::new(MetricsHandler::new(state.registry())))
        .expect_err("must conflict");
    assert!(matches!(err, FaultlineError::Conflict(ref p) if p == "/"));
    assert_eq!(err.client_code(), ClientCode::Conflict);
    assert_eq!(routes.len(), 1);
}

#[test]
fn route_path_must_be_absolute() {
    let state = AppState::new(ServiceConfig::default()).unwrap();
    let routes = RouteTable::new();
    let err = routes
        .add_route("metrics", Arc::new(MetricsHandler::new(state.registry())))
        .expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::BadRequest);
    assert!(routes.is_empty());
}

#[test]
fn request_counter_is_preregistered() {
    let state = AppState::new(ServiceConfig::default()).unwrap();
    let err = state.registry().register(REQUESTS_TOTAL, "again").expect_err("must fail");
    assert!(matches!(err, FaultlineError::DuplicateName(_)));

    let snap = state.registry().snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].name, REQUESTS_TOTAL);
    assert_eq!(snap[0].value, 0);
}

#[test]
fn default_config() {
    let cfg = ServiceConfig::default();
    assert_eq!(cfg.listen.to_string(), "0.0.0.0:5050");
    cfg.validate().unwrap();
}

#[test]
fn invalid_config_aborts_startup() {
    let bad = [
        ServiceConfig { slow_min_ms: 10, slow_max_ms: 5, ..ServiceConfig::default() },
        ServiceConfig { slow_max_ms: 600_000, ..ServiceConfig::default() },
        ServiceConfig { failure_rate: 1.5, ..ServiceConfig::default() },
        ServiceConfig { failure_rate: f64::NAN, ..ServiceConfig::default() },
        ServiceConfig { load_iterations: u64::MAX, ..ServiceConfig::default() },
    ];
    for cfg in bad {
        let err = AppState::new(cfg).err().expect("must fail");
        assert_eq!(err.client_code(), ClientCode::BadRequest);
    }
}
