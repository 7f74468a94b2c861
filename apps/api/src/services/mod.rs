//! Services backing the REST routes

pub mod health;

pub use health::{HealthCheckResponse, HealthService, ServiceHealth, ServiceStatus};
