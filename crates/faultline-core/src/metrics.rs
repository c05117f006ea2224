//! Monotonic counter registry.
//!
//! Counters are plain `AtomicU64`s shared between the registry and the
//! handles given out at registration, so incrementing never takes a lock.
//! The registry keeps counters in registration order to make repeated scrapes
//! of unchanged state byte-identical. The name list sits behind a `RwLock`
//! that is only touched by `register` and `snapshot`.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{FaultlineError, Result};

/// Content type of the Prometheus text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

struct CounterCell {
    name: String,
    help: String,
    value: AtomicU64,
}

/// Cheap, cloneable handle to a registered counter.
#[derive(Clone)]
pub struct CounterHandle {
    cell: Arc<CounterCell>,
}

impl CounterHandle {
    /// Increment by 1.
    pub fn inc(&self) {
        self.cell.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.cell.value.load(Ordering::Relaxed)
    }

    /// Name the counter was registered under.
    pub fn name(&self) -> &str {
        &self.cell.name
    }
}

impl std::fmt::Debug for CounterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterHandle")
            .field("name", &self.name())
            .field("value", &self.get())
            .finish()
    }
}

/// Point-in-time read of one counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSample {
    pub name: String,
    pub help: String,
    pub value: u64,
}

#[derive(Default)]
pub struct CounterRegistry {
    counters: RwLock<Vec<Arc<CounterCell>>>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new counter starting at zero.
    ///
    /// Fails with `DuplicateName` if `name` is taken and with `InvalidName`
    /// if it is not a valid Prometheus metric name.
    pub fn register(&self, name: &str, help: &str) -> Result<CounterHandle> {
        if !is_valid_metric_name(name) {
            return Err(FaultlineError::InvalidName(name.to_string()));
        }

        let mut counters = self.counters.write().unwrap_or_else(PoisonError::into_inner);
        if counters.iter().any(|c| c.name == name) {
            return Err(FaultlineError::DuplicateName(name.to_string()));
        }

        let cell = Arc::new(CounterCell {
            name: name.to_string(),
            help: help.to_string(),
            value: AtomicU64::new(0),
        });
        counters.push(Arc::clone(&cell));
        tracing::debug!(counter = %name, "counter registered");

        Ok(CounterHandle { cell })
    }

    /// Read every counter in registration order.
    ///
    /// Each value is a single atomic load; the sequence as a whole is not an
    /// atomic cut across counters.
    pub fn snapshot(&self) -> Vec<CounterSample> {
        let counters = self.counters.read().unwrap_or_else(PoisonError::into_inner);
        counters
            .iter()
            .map(|c| CounterSample {
                name: c.name.clone(),
                help: c.help.clone(),
                value: c.value.load(Ordering::Relaxed),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counters.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for s in self.snapshot() {
            if !s.help.is_empty() {
                let _ = writeln!(out, "# HELP {} {}", s.name, escape_help(&s.help));
            }
            let _ = writeln!(out, "# TYPE {} counter", s.name);
            let _ = writeln!(out, "{} {}", s.name, s.value);
        }
        out
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}
