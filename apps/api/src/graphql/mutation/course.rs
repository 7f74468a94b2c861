//! Course and enrollment mutations for the campus GraphQL API

use async_graphql::{Context, InputObject, Object, Result, ID};
use campus_service_clients::CourseDraft;

use crate::graphql::context::{course_client, parse_id};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::{Course, Enrollment};

pub const DOMAIN: RootDomain = RootDomain {
    name: "CourseMutation",
    fields: &[
        "createCourse",
        "updateCourse",
        "deleteCourse",
        "enrollStudent",
        "unenrollStudent",
    ],
};

#[derive(Debug, InputObject)]
pub struct CourseInput {
    pub name: String,
    pub instructor: String,
    pub category: String,
    pub schedule: String,
}

impl From<CourseInput> for CourseDraft {
    fn from(input: CourseInput) -> Self {
        Self {
            name: input.name,
            instructor: input.instructor,
            category: input.category,
            schedule: input.schedule,
        }
    }
}

#[derive(Default)]
pub struct CourseMutation;

#[Object]
impl CourseMutation {
    async fn create_course(&self, ctx: &Context<'_>, input: CourseInput) -> Result<Course> {
        let course = course_client(ctx)?
            .create_course(&input.into())
            .await
            .or_failure("Failed to create course")?;

        tracing::info!(course_id = course.id, "Course created");
        Ok(course.into())
    }

    async fn update_course(&self, ctx: &Context<'_>, id: ID, input: CourseInput) -> Result<Course> {
        let id = parse_id("course", &id)?;
        let course = course_client(ctx)?
            .update_course(id, &input.into())
            .await
            .or_failure("Failed to update course")?;
        Ok(course.into())
    }

    /// Delete a course together with its enrollments
    async fn delete_course(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = parse_id("course", &id)?;
        course_client(ctx)?
            .delete_course(id)
            .await
            .or_failure("Failed to delete course")?;
        Ok(true)
    }

    /// Enroll a student in a course
    ///
    /// The student id is not checked against the student service.
    async fn enroll_student(
        &self,
        ctx: &Context<'_>,
        course_id: ID,
        student_id: ID,
    ) -> Result<Enrollment> {
        let course_id = parse_id("course", &course_id)?;
        let student_id = parse_id("student", &student_id)?;
        let enrollment = course_client(ctx)?
            .enroll(course_id, student_id)
            .await
            .or_failure("Failed to enroll student")?;

        tracing::info!(course_id, student_id, "Student enrolled");
        Ok(enrollment.into())
    }

    async fn unenroll_student(
        &self,
        ctx: &Context<'_>,
        course_id: ID,
        student_id: ID,
    ) -> Result<bool> {
        let course_id = parse_id("course", &course_id)?;
        let student_id = parse_id("student", &student_id)?;
        course_client(ctx)?
            .unenroll(course_id, student_id)
            .await
            .or_failure("Failed to unenroll student")?;

        tracing::info!(course_id, student_id, "Student unenrolled");
        Ok(true)
    }
}
