//! Shared application state.
//!
//! Owns the counter registry and the request counter so handlers receive them
//! explicitly instead of reaching for a global.

use std::sync::Arc;

use faultline_core::error::Result;
use faultline_core::metrics::{CounterHandle, CounterRegistry};

use crate::config::ServiceConfig;
use crate::random::{RandomSource, ThreadRandom};

pub const REQUESTS_TOTAL: &str = "web_requests_total";
const REQUESTS_HELP: &str = "Total number of requests";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    registry: Arc<CounterRegistry>,
    requests: CounterHandle,
    random: Arc<dyn RandomSource>,
}

impl AppState {
    /// Build application state with the thread-local random source.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        Self::with_random(cfg, Arc::new(ThreadRandom))
    }

    pub fn with_random(cfg: ServiceConfig, random: Arc<dyn RandomSource>) -> Result<Self> {
        cfg.validate()?;

        let registry = Arc::new(CounterRegistry::new());
        let requests = registry.register(REQUESTS_TOTAL, REQUESTS_HELP)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                requests,
                random,
            }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<CounterRegistry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn requests(&self) -> CounterHandle {
        self.inner.requests.clone()
    }

    pub fn random(&self) -> Arc<dyn RandomSource> {
        Arc::clone(&self.inner.random)
    }
}
