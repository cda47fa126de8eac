// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the client, the handler and configuration loading.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors returned by [`GhostClient`](crate::GhostClient) operations.
///
/// All of them are terminal for the call; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP exchange itself failed (connection refused, DNS, timeout...).
    #[error("error doing {operation} request: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with something other than 200.
    #[error("unexpected response status code {0}")]
    UnexpectedStatus(u16),

    /// The listing body is not a JSON object of booleans.
    #[error("error decoding monitors response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid remote url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status carried by an [`ClientError::UnexpectedStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Request failures inside the protocol handler.
///
/// Each maps to a status code; none of them escapes the request.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Unparsable form or unknown action.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("monitor '{0}' not found")]
    NotFound(String),

    #[error("failed to encode monitor states: {0}")]
    Encode(#[from] serde_json::Error),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::NotFound(_) => StatusCode::NOT_FOUND,
            HandlerError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_status_codes() {
        assert_eq!(
            HandlerError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HandlerError::NotFound("runtime".into()).status(),
            StatusCode::NOT_FOUND
        );

        let encode = serde_json::from_str::<bool>("nope").unwrap_err();
        assert_eq!(
            HandlerError::from(encode).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_handler_error_into_response() {
        let response = HandlerError::NotFound("missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = ClientError::UnexpectedStatus(404);
        assert_eq!(err.to_string(), "unexpected response status code 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_invalid_url_has_no_status() {
        let err = ClientError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("nope"));
    }
}
