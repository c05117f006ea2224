//! Fault injection.
//!
//! `/crash` terminates the whole process on purpose. It answers first, then
//! exits from a detached task so the response can be flushed. This is not an
//! error path: nothing here goes through handler failure or the 500 reply.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use faultline_core::error::Result;

use crate::dispatch::{Handler, Reply, RequestCtx};

/// Called with the exit code once the grace period has elapsed.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

pub const CRASH_EXIT_CODE: i32 = 1;
const FLUSH_GRACE: Duration = Duration::from_millis(100);

pub struct CrashHandler {
    exit: ExitHook,
    grace: Duration,
}

impl Default for CrashHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CrashHandler {
    pub fn new() -> Self {
        Self::with_exit_hook(Arc::new(exit_process), FLUSH_GRACE)
    }

    pub fn with_exit_hook(exit: ExitHook, grace: Duration) -> Self {
        Self { exit, grace }
    }
}

#[async_trait]
impl Handler for CrashHandler {
    async fn handle(&self, _req: RequestCtx) -> Result<Reply> {
        tracing::warn!(code = CRASH_EXIT_CODE, "fault injection: terminating process");

        let exit = Arc::clone(&self.exit);
        let grace = self.grace;
        tokio::spawn(async move {
            sleep(grace).await;
            exit(CRASH_EXIT_CODE);
        });

        Ok(Reply::text("Crashing process"))
    }
}

fn exit_process(code: i32) {
    std::process::exit(code);
}
