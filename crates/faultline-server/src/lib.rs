//! faultline server library entry.
//!
//! Wires the counter registry, route table, built-in handlers and the fault
//! injection hook into an HTTP service. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod fault;
pub mod random;
pub mod router;
pub mod server;
pub mod services;
