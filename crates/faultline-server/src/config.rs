//! Service configuration.
//!
//! Built in code; there is no config file. `validate` is run by
//! `AppState::new` so a bad value aborts startup.

use std::net::SocketAddr;

use faultline_core::error::{FaultlineError, Result};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen: SocketAddr,

    /// Bounds (inclusive) of the `/slow` delay.
    pub slow_min_ms: u64,
    pub slow_max_ms: u64,

    /// Probability in `[0, 1]` that `/random` fails.
    pub failure_rate: f64,

    /// Length of the `/load` summation loop.
    pub load_iterations: u64,

    /// Expose `/crash`.
    pub fault_injection: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            slow_min_ms: 1000,
            slow_max_ms: 3000,
            failure_rate: 0.5,
            load_iterations: 10_000_000,
            fault_injection: true,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slow_min_ms > self.slow_max_ms {
            return Err(FaultlineError::BadRequest(
                "slow_min_ms must not exceed slow_max_ms".into(),
            ));
        }
        if self.slow_max_ms > MAX_SLOW_MS {
            return Err(FaultlineError::BadRequest(format!(
                "slow_max_ms must be at most {MAX_SLOW_MS}"
            )));
        }
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(FaultlineError::BadRequest(
                "failure_rate must be between 0 and 1".into(),
            ));
        }
        if self.load_iterations > MAX_LOAD_ITERATIONS {
            return Err(FaultlineError::BadRequest(format!(
                "load_iterations must be at most {MAX_LOAD_ITERATIONS}"
            )));
        }
        Ok(())
    }
}

const MAX_SLOW_MS: u64 = 60_000;
const MAX_LOAD_ITERATIONS: u64 = 1_000_000_000;

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5050))
}
