//! Error types for the upstream service clients

use thiserror::Error;

/// Errors that can occur when calling an upstream service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Base URL could not be used to build request URLs
    #[error("invalid base URL for {service} service: {reason}")]
    InvalidUrl {
        service: &'static str,
        reason: String,
    },

    /// Connection refused (service not running)
    #[error("connection refused. Is the {service} service running at {url}?")]
    ConnectionRefused { service: &'static str, url: String },

    /// HTTP request failed in transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("{service} service returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Response body was not the JSON shape we expected
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Status code returned by the upstream, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            ServiceError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the upstream reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the upstream could not be reached or failed on its side
    pub fn is_unavailable(&self) -> bool {
        match self {
            ServiceError::ConnectionRefused { .. } => true,
            ServiceError::Http(e) => e.is_connect() || e.is_timeout(),
            ServiceError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type for upstream service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
