use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::json;

use faultline_core::error::FaultlineError;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// What a handler hands back: status, body and content type.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Bytes,
    pub content_type: &'static str,
}

impl Reply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>, content_type: &'static str) -> Self {
        Self {
            status,
            body: body.into(),
            content_type,
        }
    }

    /// 200 with a plain text body.
    pub fn text(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body, TEXT_PLAIN)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found", TEXT_PLAIN)
    }

    /// 500 carrying the client code and message as JSON.
    pub fn from_error(err: &FaultlineError) -> Self {
        let body = json!({
            "error": err.client_code().as_str(),
            "message": err.to_string(),
        });
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            body.to_string(),
            "application/json",
        )
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}
