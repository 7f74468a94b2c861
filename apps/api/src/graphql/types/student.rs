//! Student GraphQL type

use async_graphql::{Context, Object, Result, ID};
use campus_service_clients::Student as StudentRecord;

use crate::graphql::context::course_client;
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::fanout::gather_present;

use super::course::Course;
use super::university::University;

/// Student as owned by the student service
pub struct Student {
    inner: StudentRecord,
}

impl From<StudentRecord> for Student {
    fn from(student: StudentRecord) -> Self {
        Self { inner: student }
    }
}

#[Object]
impl Student {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn first_name(&self) -> &str {
        &self.inner.first_name
    }

    async fn last_name(&self) -> &str {
        &self.inner.last_name
    }

    async fn email(&self) -> &str {
        &self.inner.email
    }

    /// University embedded in the student record; never fetched separately
    async fn university(&self) -> Option<University> {
        self.inner.university.clone().map(University::from)
    }

    /// Courses the student is enrolled in
    ///
    /// One course lookup per enrollment, all concurrent. Courses that cannot
    /// be resolved are left out; if the enrollments themselves cannot be
    /// fetched the list is empty.
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let courses = course_client(ctx)?;
        let enrollments = courses
            .list_enrollments_by_student(self.inner.id)
            .await
            .or_degraded("list_enrollments_by_student");

        let lookups = enrollments.into_iter().map(|enrollment| {
            let courses = courses.clone();
            async move {
                courses
                    .get_course(enrollment.course_id)
                    .await
                    .or_degraded("get_course")
            }
        });

        Ok(gather_present(lookups)
            .await
            .into_iter()
            .map(Course::from)
            .collect())
    }
}
