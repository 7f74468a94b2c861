//! REST clients for the campus microservices
//!
//! This crate provides one client per upstream service:
//! - [`StudentClient`]: students and universities
//! - [`CourseClient`]: courses and enrollments
//! - [`ChatbotClient`]: translation and summarization
//!
//! Every operation returns a typed [`ServiceResult`]. A lookup by id that the
//! service answers with 404 is `Ok(None)`, not an error; deciding whether any
//! other failure degrades to an empty value is left to the caller.
//!
//! # Thread Safety
//!
//! All clients are `Clone + Send + Sync` and share one HTTP connection pool
//! per instance.
//!
//! # Example
//!
//! ```no_run
//! use campus_service_clients::{CourseClient, StudentClient};
//! use campus_shared_config::ServicesConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let services = ServicesConfig::default();
//! let students = StudentClient::new(&services.student)?;
//! let courses = CourseClient::new(&services.course)?;
//!
//! for enrollment in courses.list_course_enrollments(1).await? {
//!     if let Some(student) = students.get_student(enrollment.student_id).await? {
//!         println!("{} {}", student.first_name, student.last_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod chatbot;
mod course;
mod error;
mod http;
mod models;
mod student;

pub use chatbot::{ChatbotClient, DEFAULT_SUMMARY_MAX_LENGTH, DEFAULT_SUMMARY_MIN_LENGTH};
pub use course::CourseClient;
pub use error::{ServiceError, ServiceResult};
pub use http::CALLER_ROLE_HEADER;
pub use models::{
    Course, CourseDraft, Enrollment, Language, Student, StudentDraft, Summary,
    SupportedLanguages, Translation, University, UniversityDraft, UniversityRef,
};
pub use student::StudentClient;
