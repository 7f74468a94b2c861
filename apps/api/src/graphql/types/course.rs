//! Course GraphQL type

use async_graphql::{Context, Object, Result, ID};
use campus_service_clients::Course as CourseRecord;
use chrono::{DateTime, Utc};

use crate::graphql::context::{course_client, student_client};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::fanout::gather_present;

use super::student::Student;

/// Course as owned by the course service
pub struct Course {
    inner: CourseRecord,
}

impl From<CourseRecord> for Course {
    fn from(course: CourseRecord) -> Self {
        Self { inner: course }
    }
}

#[Object]
impl Course {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn instructor(&self) -> &str {
        &self.inner.instructor
    }

    async fn category(&self) -> &str {
        &self.inner.category
    }

    async fn schedule(&self) -> &str {
        &self.inner.schedule
    }

    async fn created_at(&self) -> Option<DateTime<Utc>> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.inner.updated_at
    }

    /// Students enrolled in this course, in roster order
    ///
    /// One student lookup per enrollment, all concurrent. Students that no
    /// longer exist are left out. A failed roster fetch yields an empty list
    /// without affecting the other course fields.
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let enrollments = course_client(ctx)?
            .list_course_enrollments(self.inner.id)
            .await
            .or_degraded("list_course_enrollments");

        let students = student_client(ctx)?;
        let lookups = enrollments.into_iter().map(|enrollment| {
            let students = students.clone();
            async move {
                students
                    .get_student(enrollment.student_id)
                    .await
                    .or_degraded("get_student")
            }
        });

        Ok(gather_present(lookups)
            .await
            .into_iter()
            .map(Student::from)
            .collect())
    }
}
