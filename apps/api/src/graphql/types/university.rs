//! University GraphQL type

use async_graphql::{Context, Object, Result, ID};
use campus_service_clients::University as UniversityRecord;

use crate::graphql::context::student_client;
use crate::graphql::degrade::ServiceResultExt;

use super::student::Student;

/// University as owned by the student service
pub struct University {
    inner: UniversityRecord,
}

impl From<UniversityRecord> for University {
    fn from(university: UniversityRecord) -> Self {
        Self { inner: university }
    }
}

#[Object]
impl University {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn location(&self) -> Option<&str> {
        self.inner.location.as_deref()
    }

    /// Students attending this university (empty if the lookup fails)
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let students = student_client(ctx)?
            .list_students_by_university(self.inner.id)
            .await
            .or_degraded("list_students_by_university");
        Ok(students.into_iter().map(Student::from).collect())
    }
}
