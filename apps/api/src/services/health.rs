//! Health check service for verifying the upstream microservices
//!
//! This service probes each upstream the gateway composes:
//! - Student service (students and universities)
//! - Course service (courses and enrollments)
//! - Chatbot service (translation and summarization)

use std::future::Future;
use std::time::{Duration, Instant};

use campus_service_clients::{ChatbotClient, CourseClient, ServiceResult, StudentClient};
use serde::Serialize;

/// Status of an individual service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is healthy and responding
    Healthy,
    /// Service is unhealthy or unreachable
    Unhealthy,
}

/// Result of a single service health check
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    /// Name of the service
    pub name: &'static str,
    /// Current status
    pub status: ServiceStatus,
    /// Response time in milliseconds (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy service result
    pub fn healthy(name: &'static str, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Healthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: None,
        }
    }

    /// Create an unhealthy service result
    pub fn unhealthy(name: &'static str, error: impl Into<String>) -> Self {
        Self {
            name,
            status: ServiceStatus::Unhealthy,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    /// Create an unhealthy service result with response time
    pub fn unhealthy_with_time(
        name: &'static str,
        error: impl Into<String>,
        response_time: Duration,
    ) -> Self {
        Self {
            name,
            status: ServiceStatus::Unhealthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: Some(error.into()),
        }
    }
}

/// Aggregated health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Overall status (healthy only if every upstream is healthy)
    pub status: ServiceStatus,
    /// Individual service health results
    pub services: Vec<ServiceHealth>,
    /// Total time to complete all health checks
    pub total_time_ms: u64,
    /// API version
    pub version: &'static str,
}

impl HealthCheckResponse {
    /// Create a new health check response from individual service results
    pub fn new(services: Vec<ServiceHealth>, total_time: Duration) -> Self {
        let status = if services.iter().all(|s| s.status == ServiceStatus::Healthy) {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Unhealthy
        };

        Self {
            status,
            services,
            total_time_ms: total_time.as_millis() as u64,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Check if overall health is good
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Health check service over the upstream clients
#[derive(Clone)]
pub struct HealthService {
    student_client: StudentClient,
    course_client: CourseClient,
    chatbot_client: ChatbotClient,
}

impl HealthService {
    pub fn new(
        student_client: StudentClient,
        course_client: CourseClient,
        chatbot_client: ChatbotClient,
    ) -> Self {
        Self {
            student_client,
            course_client,
            chatbot_client,
        }
    }

    async fn check(
        name: &'static str,
        probe: impl Future<Output = ServiceResult<bool>>,
    ) -> ServiceHealth {
        let start = Instant::now();

        match probe.await {
            Ok(true) => ServiceHealth::healthy(name, start.elapsed()),
            Ok(false) => ServiceHealth::unhealthy_with_time(
                name,
                "Service returned a server error",
                start.elapsed(),
            ),
            Err(e) => ServiceHealth::unhealthy(name, format!("Request failed: {}", e)),
        }
    }

    /// Run all health checks in parallel
    pub async fn check_all(&self) -> HealthCheckResponse {
        let start = Instant::now();

        let (student_health, course_health, chatbot_health) = tokio::join!(
            Self::check("student", self.student_client.health_check()),
            Self::check("course", self.course_client.health_check()),
            Self::check("chatbot", self.chatbot_client.health_check()),
        );

        let services = vec![student_health, course_health, chatbot_health];

        HealthCheckResponse::new(services, start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_status_requires_every_service() {
        let healthy = HealthCheckResponse::new(
            vec![
                ServiceHealth::healthy("student", Duration::from_millis(3)),
                ServiceHealth::healthy("course", Duration::from_millis(4)),
            ],
            Duration::from_millis(5),
        );
        assert!(healthy.is_healthy());

        let degraded = HealthCheckResponse::new(
            vec![
                ServiceHealth::healthy("student", Duration::from_millis(3)),
                ServiceHealth::unhealthy("chatbot", "Request failed"),
            ],
            Duration::from_millis(5),
        );
        assert!(!degraded.is_healthy());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ServiceHealth::unhealthy("course", "down")).unwrap();
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["error"], "down");
        assert!(json.get("response_time_ms").is_none());
    }
}
