//! HTTP route handlers for the campus gateway
//!
//! This module contains the REST endpoints served next to GraphQL:
//! - Health check and readiness endpoints
//! - The fallback for unknown routes

pub mod health;

pub use health::{health_router, HealthState};

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback handler answering unknown routes with a JSON 404
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}
