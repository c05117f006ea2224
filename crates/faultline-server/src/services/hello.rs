use async_trait::async_trait;

use faultline_core::error::Result;
use faultline_core::metrics::CounterHandle;

use crate::dispatch::{Handler, Reply, RequestCtx};

pub struct HelloHandler {
    requests: CounterHandle,
}

impl HelloHandler {
    pub fn new(requests: CounterHandle) -> Self {
        Self { requests }
    }
}

#[async_trait]
impl Handler for HelloHandler {
    async fn handle(&self, _req: RequestCtx) -> Result<Reply> {
        self.requests.inc();
        Ok(Reply::text("Hello World"))
    }
}
