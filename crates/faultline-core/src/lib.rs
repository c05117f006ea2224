//! faultline core: transport-agnostic error types and the counter registry.
//!
//! This crate holds the contracts shared by the HTTP service and its tests:
//! the error surface with stable client codes, and a monotonic counter
//! registry that renders itself in the Prometheus text exposition format.
//! It carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `FaultlineError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{ClientCode, FaultlineError, Result};
pub use metrics::{CounterHandle, CounterRegistry, CounterSample, CONTENT_TYPE};
