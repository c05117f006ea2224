//! Dispatcher module exports.
//!
//! Re-exports the route table, handler trait and reply type so handlers and
//! tests can depend on this module directly.

pub mod dispatcher;
pub mod reply;

pub use dispatcher::{dispatch, Handler, RequestCtx, RouteTable};
pub use reply::Reply;
