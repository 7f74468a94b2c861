//! Error handling for the campus gateway
//!
//! This module provides a unified error type using thiserror, with HTTP
//! status code mapping via Axum's IntoResponse trait for REST routes and
//! conversion into GraphQL errors carrying an `extensions.code`.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_service_clients::ServiceError;
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Resource Errors ==========
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ========== Validation Errors ==========
    /// Identifier argument is not a valid upstream id
    #[error("invalid {resource_type} ID: {id}")]
    InvalidId {
        resource_type: &'static str,
        id: String,
    },

    // ========== Upstream Errors ==========
    /// An upstream call failed; only `message` is shown to clients
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { source, .. } if source.is_unavailable() => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidId { .. } => "BAD_USER_INPUT",
            Self::Upstream { source, .. } if source.is_unavailable() => "SERVICE_UNAVAILABLE",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Create an invalid id error for a specific resource
    pub fn invalid_id(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::InvalidId {
            resource_type,
            id: id.into(),
        }
    }

    /// Wrap an upstream failure behind a generic client-facing message
    pub fn upstream(message: &'static str, source: ServiceError) -> Self {
        Self::Upstream { message, source }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            match self {
                Self::Upstream { source, .. } => tracing::error!(
                    error = %source,
                    code = self.error_code(),
                    "{}",
                    self
                ),
                _ => tracing::error!(
                    error = %self,
                    code = self.error_code(),
                    status = status.as_u16(),
                    "Server error occurred"
                ),
            }
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
