//! Enrollment GraphQL type

use async_graphql::{Context, Object, Result, ID};
use campus_service_clients::Enrollment as EnrollmentRecord;
use chrono::{DateTime, Utc};

use crate::graphql::context::course_client;
use crate::graphql::degrade::ServiceResultExt;

use super::course::Course;

/// Membership of one student in one course
pub struct Enrollment {
    inner: EnrollmentRecord,
}

impl From<EnrollmentRecord> for Enrollment {
    fn from(enrollment: EnrollmentRecord) -> Self {
        Self { inner: enrollment }
    }
}

#[Object]
impl Enrollment {
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    async fn student_id(&self) -> ID {
        ID::from(self.inner.student_id)
    }

    async fn course_id(&self) -> ID {
        ID::from(self.inner.course_id)
    }

    async fn enrolled_at(&self) -> Option<DateTime<Utc>> {
        self.inner.enrolled_at
    }

    /// The enrolled course, or null if it cannot be resolved
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<Course>> {
        let course = course_client(ctx)?
            .get_course(self.inner.course_id)
            .await
            .or_degraded("get_course");
        Ok(course.map(Course::from))
    }
}
