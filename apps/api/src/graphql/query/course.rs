//! Course and enrollment queries for the campus GraphQL API

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::context::{course_client, parse_id};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::{Course, Enrollment};

pub const DOMAIN: RootDomain = RootDomain {
    name: "CourseQuery",
    fields: &[
        "course",
        "courses",
        "searchCourses",
        "coursesByCategory",
        "coursesByInstructor",
        "enrollments",
        "enrollmentsByStudent",
        "courseWithStudents",
    ],
};

/// Course and enrollment lookups, each mapped to one course service call
#[derive(Default)]
pub struct CourseQuery;

#[Object]
impl CourseQuery {
    // ==================== Course Queries ====================

    /// Get a course by ID
    async fn course(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
        let id = parse_id("course", &id)?;
        let course = course_client(ctx)?
            .get_course(id)
            .await
            .or_degraded("get_course");
        Ok(course.map(Course::from))
    }

    /// List all courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let courses = course_client(ctx)?
            .list_courses()
            .await
            .or_degraded("list_courses");
        Ok(courses.into_iter().map(Course::from).collect())
    }

    /// Search courses by name, instructor or category
    async fn search_courses(&self, ctx: &Context<'_>, keyword: String) -> Result<Vec<Course>> {
        let courses = course_client(ctx)?
            .search_courses(&keyword)
            .await
            .or_degraded("search_courses");
        Ok(courses.into_iter().map(Course::from).collect())
    }

    async fn courses_by_category(&self, ctx: &Context<'_>, category: String) -> Result<Vec<Course>> {
        let courses = course_client(ctx)?
            .list_courses_by_category(&category)
            .await
            .or_degraded("list_courses_by_category");
        Ok(courses.into_iter().map(Course::from).collect())
    }

    async fn courses_by_instructor(
        &self,
        ctx: &Context<'_>,
        instructor: String,
    ) -> Result<Vec<Course>> {
        let courses = course_client(ctx)?
            .list_courses_by_instructor(&instructor)
            .await
            .or_degraded("list_courses_by_instructor");
        Ok(courses.into_iter().map(Course::from).collect())
    }

    /// Get a course by ID, intended for selecting `students` alongside
    async fn course_with_students(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
        self.course(ctx, id).await
    }

    // ==================== Enrollment Queries ====================

    /// List all enrollments
    async fn enrollments(&self, ctx: &Context<'_>) -> Result<Vec<Enrollment>> {
        let enrollments = course_client(ctx)?
            .list_enrollments()
            .await
            .or_degraded("list_enrollments");
        Ok(enrollments.into_iter().map(Enrollment::from).collect())
    }

    /// Enrollments of one student
    async fn enrollments_by_student(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
    ) -> Result<Vec<Enrollment>> {
        let student_id = parse_id("student", &student_id)?;
        let enrollments = course_client(ctx)?
            .list_enrollments_by_student(student_id)
            .await
            .or_degraded("list_enrollments_by_student");
        Ok(enrollments.into_iter().map(Enrollment::from).collect())
    }
}
