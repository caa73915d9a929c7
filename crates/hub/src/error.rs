// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the hub.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from the gateway authentication protocol and its accessors.
#[derive(Debug, Error)]
pub enum PowerwallError {
    /// Transport-level failure talking to the gateway.
    #[error("gateway request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Login completed over the wire but produced no usable credential.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The gateway rejected both the original and the retried request.
    #[error("gateway rejected credentials (status {status})")]
    UpstreamAuth { status: u16 },

    /// A final response arrived but its body lacks what the accessor needs.
    #[error("unexpected gateway response: {0}")]
    UnexpectedBody(String),
}

impl PowerwallError {
    /// True when the failure is the gateway refusing our credentials
    /// after the single reauthenticate-and-retry already ran.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::UpstreamAuth { .. })
    }
}

/// Error codes for the hub API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubError {
    BadRequest,
    NotFound,
    Internal,
}

impl HubError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
        }
    }

    pub fn to_error_body(&self, message: impl Into<String>) -> ErrorBody {
        ErrorBody { code: self.as_str().to_owned(), message: message.into() }
    }

    pub fn to_http_response(
        &self,
        message: impl Into<String>,
    ) -> (StatusCode, Json<ErrorResponse>) {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse { error: self.to_error_body(message) };
        (status, Json(body))
    }
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error body with machine-readable code and human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_auth_is_the_only_auth_rejection() {
        let err = PowerwallError::UpstreamAuth { status: 403 };
        assert!(err.is_auth_rejection());
        assert!(!PowerwallError::Auth("no token in response".to_owned()).is_auth_rejection());
    }

    #[test]
    fn hub_error_maps_to_status_and_code() {
        assert_eq!(HubError::BadRequest.http_status(), 400);
        assert_eq!(HubError::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(HubError::Internal.to_error_body("boom").code, "INTERNAL");
    }
}
