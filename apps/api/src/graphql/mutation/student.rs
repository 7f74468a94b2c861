//! Student mutations for the campus GraphQL API
//!
//! Writes are passed through to the student service, which enforces the
//! caller's role. Any upstream failure surfaces as a generic error.

use async_graphql::{Context, InputObject, Object, Result, ID};
use campus_service_clients::{StudentDraft, UniversityRef};

use crate::graphql::context::{parse_id, student_client};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::Student;

pub const DOMAIN: RootDomain = RootDomain {
    name: "StudentMutation",
    fields: &[
        "createStudent",
        "updateStudent",
        "deleteStudent",
    ],
};

// =============================================================================
// Input Types
// =============================================================================

#[derive(Debug, InputObject)]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub university_id: Option<ID>,
}

impl StudentInput {
    fn into_draft(self) -> Result<StudentDraft> {
        let university = self
            .university_id
            .as_ref()
            .map(|id| parse_id("university", id).map(|id| UniversityRef { id }))
            .transpose()?;

        Ok(StudentDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            university,
        })
    }
}

// =============================================================================
// Mutations
// =============================================================================

#[derive(Default)]
pub struct StudentMutation;

#[Object]
impl StudentMutation {
    async fn create_student(&self, ctx: &Context<'_>, input: StudentInput) -> Result<Student> {
        let draft = input.into_draft()?;
        let student = student_client(ctx)?
            .create_student(&draft)
            .await
            .or_failure("Failed to create student")?;

        tracing::info!(student_id = student.id, "Student created");
        Ok(student.into())
    }

    async fn update_student(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: StudentInput,
    ) -> Result<Student> {
        let id = parse_id("student", &id)?;
        let draft = input.into_draft()?;
        let student = student_client(ctx)?
            .update_student(id, &draft)
            .await
            .or_failure("Failed to update student")?;
        Ok(student.into())
    }

    /// Delete a student; enrollments held by the course service are untouched
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = parse_id("student", &id)?;
        student_client(ctx)?
            .delete_student(id)
            .await
            .or_failure("Failed to delete student")?;

        tracing::info!(student_id = id, "Student deleted");
        Ok(true)
    }
}
