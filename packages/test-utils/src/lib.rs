//! Shared test utilities for the campus gateway workspace
//!
//! This crate provides mock implementations of the upstream services so that
//! the gateway can be tested without network dependencies.
//!
//! # Mock Services
//!
//! - [`MockStudentService`] - Stateful student and university directory
//! - [`MockCourseService`] - Stateful course catalog with enrollments
//! - [`MockChatbotService`] - Canned translation and summarization responses
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_test_utils::{MockStudentService, StudentFixture, UniversityFixture};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let ensa = UniversityFixture::new(1, "ENSA", "Tetouan");
//!     let students = MockStudentService::with_records(
//!         vec![ensa.clone()],
//!         vec![StudentFixture::new(10, "Alice", &ensa)],
//!     )
//!     .await;
//!
//!     // Use students.url() to configure your client
//! }
//! ```

mod chatbot;
mod course;
mod fixtures;
mod student;

pub use chatbot::MockChatbotService;
pub use course::MockCourseService;
pub use fixtures::{CourseFixture, EnrollmentFixture, StudentFixture, UniversityFixture};
pub use student::MockStudentService;

use serde_json::Value;
use wiremock::Request;

/// Path segment at `index` (zero-based, ignoring the leading slash)
pub(crate) fn path_segment(request: &Request, index: usize) -> Option<String> {
    request
        .url
        .path_segments()
        .and_then(|mut segments| segments.nth(index))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First value of query parameter `key`
pub(crate) fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub(crate) fn json_body(request: &Request) -> Option<Value> {
    serde_json::from_slice(&request.body).ok()
}
