//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calc_core::CalcError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The expression was rejected by the engine. The message is surfaced verbatim.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// The request body is not a valid calculate request.
    ///
    /// The decode error is kept for logging and never sent to the client.
    #[error("Internal server error")]
    MalformedBody(#[source] serde_json::Error),
}

impl GatewayError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Calc(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let GatewayError::MalformedBody(source) = &self {
            tracing::warn!(error = %source, "failed to decode request body");
        }
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}

/// Errors raised while loading [`crate::config::GatewayConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A boolean variable held something other than `true`/`false`/`1`/`0`.
    #[error("invalid value '{value}' for {var}: expected true, false, 1 or 0")]
    InvalidFlag { var: &'static str, value: String },

    /// The listen address variable was set but empty.
    #[error("{var} must not be empty")]
    EmptyAddr { var: &'static str },
}
