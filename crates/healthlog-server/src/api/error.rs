//! API error responses.
//!
//! Callers only ever see the fixed `{ "error": ... }` bodies; the underlying
//! error is logged, not returned.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use healthlog_core::HealthLogError;

/// Which operation failed; picks the 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Submit,
    Fetch,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::Submit => "Failed to process health data",
            Operation::Fetch => "Failed to fetch health data",
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub op: Operation,
    pub err: HealthLogError,
}

impl ApiError {
    pub fn submit(err: HealthLogError) -> Self {
        Self { op: Operation::Submit, err }
    }

    pub fn fetch(err: HealthLogError) -> Self {
        Self { op: Operation::Fetch, err }
    }

    pub fn status(&self) -> StatusCode {
        match self.err {
            HealthLogError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self.err {
            HealthLogError::Validation(msg) => msg.as_str(),
            _ => self.op.failure_message(),
        };

        if status.is_server_error() {
            tracing::error!(op = ?self.op, code = self.err.client_code().as_str(), error = %self.err, "health log request failed");
        } else {
            tracing::warn!(op = ?self.op, error = %self.err, "health log request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
