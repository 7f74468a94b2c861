//! Campus gateway library
//!
//! This module exposes the gateway components for use in integration tests
//! and by the server binary.

pub mod app;
pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use app::{build_cors_layer, build_router};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use graphql::{build_schema, CallerRole, CampusSchema};
pub use services::HealthService;
