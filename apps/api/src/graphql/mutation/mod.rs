//! GraphQL mutations for the campus gateway
//!
//! This module contains all mutation resolvers, organized by owning service.

mod course;
mod student;
mod university;

pub use course::{CourseInput, CourseMutation};
pub use student::{StudentInput, StudentMutation};
pub use university::{UniversityInput, UniversityMutation};

use async_graphql::MergedObject;

use super::registry::RootDomain;

/// Root field ownership of every mutation domain merged into [`Mutation`]
pub const MUTATION_DOMAINS: &[RootDomain] = &[
    student::DOMAIN,
    university::DOMAIN,
    course::DOMAIN,
];

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(StudentMutation, UniversityMutation, CourseMutation);
