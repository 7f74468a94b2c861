//! GraphQL type definitions for the campus gateway
//!
//! Each type wraps the record returned by its owning service. Relationship
//! fields (`Student.courses`, `Course.students`, `University.students`,
//! `Enrollment.course`) are resolved at query time through the service clients.

mod chatbot;
mod course;
mod enrollment;
mod student;
mod university;

pub use chatbot::{Language, SupportedLanguages, Summary, Translation};
pub use course::Course;
pub use enrollment::Enrollment;
pub use student::Student;
pub use university::University;
