//! GraphQL queries for the campus gateway
//!
//! This module contains all query resolvers, organized by domain. Each
//! domain declares the root fields it owns in its `DOMAIN` constant.

mod chatbot;
mod course;
mod student;
mod university;

pub use chatbot::ChatbotQuery;
pub use course::CourseQuery;
pub use student::StudentQuery;
pub use university::UniversityQuery;

use async_graphql::MergedObject;

use super::registry::RootDomain;

/// Root field ownership of every query domain merged into [`Query`]
pub const QUERY_DOMAINS: &[RootDomain] = &[
    student::DOMAIN,
    university::DOMAIN,
    course::DOMAIN,
    chatbot::DOMAIN,
];

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(StudentQuery, UniversityQuery, CourseQuery, ChatbotQuery);
