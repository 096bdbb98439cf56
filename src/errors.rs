// ABOUTME: Unified error handling system with stable error codes and HTTP response formatting
// ABOUTME: Maps internal failures to the user-safe taxonomy surfaced by the recap endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling System
//!
//! Defines the closed error taxonomy for the recap pipeline, the HTTP status
//! each code maps to, and the `{"error": "..."}` wire format returned to
//! callers. Messages not on the safe allow-list are masked before leaving
//! the service so upstream implementation detail never leaks.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Missing or malformed identifier in the request
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Vanity URL resolution found no matching profile
    #[serde(rename = "UNRESOLVABLE")]
    Unresolvable,
    /// Profile lookup returned zero player records
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    /// Library payload omitted the games collection (private or empty account)
    #[serde(rename = "PRIVATE_OR_EMPTY")]
    PrivateOrEmpty,
    /// Transport failure or non-success status on a mandatory upstream call
    #[serde(rename = "UPSTREAM_UNAVAILABLE")]
    UpstreamUnavailable,
    /// Caller exceeded the request rate limit
    #[serde(rename = "RATE_LIMITED")]
    RateLimited,
    /// Required configuration (the Steam API key) is missing
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Anything uncaught; always masked before reaching the caller
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request: input, not-found and private-library conditions
            Self::InvalidInput | Self::Unresolvable | Self::NotFound | Self::PrivateOrEmpty => 400,

            // 429 Too Many Requests: the external gate, checked before the pipeline runs
            Self::RateLimited => 429,

            // 500 Internal Server Error: transport, configuration and unexpected failures
            Self::UpstreamUnavailable | Self::ConfigError | Self::InternalError => 500,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// The message surfaced to the caller.
    ///
    /// Only messages on the safe allow-list leave the service verbatim;
    /// everything else is masked to a generic failure message.
    #[must_use]
    pub fn user_message(&self) -> &str {
        if messages::SAFE_ERROR_MESSAGES.contains(&self.message.as_str()) {
            &self.message
        } else {
            messages::GENERIC_FAILURE
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.user_message().to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = axum::http::StatusCode::from_u16(self.http_status())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse::from(&self);
        if status.is_server_error() {
            tracing::error!(code = ?self.code, message = %self.message, "request failed");
        } else {
            tracing::debug!(code = ?self.code, message = %self.message, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

/// Convenience constructors for common errors
impl AppError {
    /// Missing or malformed identifier
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Vanity URL resolution found no match
    pub fn unresolvable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unresolvable, message)
    }

    /// Profile not found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Library inaccessible
    pub fn private_or_empty(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PrivateOrEmpty, message)
    }

    /// Transport or non-success status on a mandatory call
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// Rate limit exceeded
    pub fn rate_limited() -> Self {
        Self::new(ErrorCode::RateLimited, messages::RATE_LIMITED)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::Unresolvable.http_status(), 400);
        assert_eq!(ErrorCode::NotFound.http_status(), 400);
        assert_eq!(ErrorCode::PrivateOrEmpty.http_status(), 400);
        assert_eq!(ErrorCode::RateLimited.http_status(), 429);
        assert_eq!(ErrorCode::UpstreamUnavailable.http_status(), 500);
        assert_eq!(ErrorCode::ConfigError.http_status(), 500);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_safe_message_passes_through() {
        let error = AppError::not_found(messages::PROFILE_NOT_FOUND);
        assert_eq!(error.user_message(), messages::PROFILE_NOT_FOUND);
    }

    #[test]
    fn test_unknown_message_is_masked() {
        let error = AppError::internal("reqwest::Error { kind: Connect }");
        assert_eq!(error.user_message(), messages::GENERIC_FAILURE);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::private_or_empty(messages::LIBRARY_PRIVATE_OR_EMPTY);
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.starts_with("{\"error\":"));
        assert!(json.contains("private or empty"));
    }
}
