//! Student queries for the campus GraphQL API

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::context::{parse_id, student_client};
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::Student;

pub const DOMAIN: RootDomain = RootDomain {
    name: "StudentQuery",
    fields: &[
        "student",
        "students",
        "searchStudents",
        "studentsByUniversity",
        "studentWithCourses",
        "studentByEmail",
    ],
};

/// Student lookups, each mapped to one student service call
#[derive(Default)]
pub struct StudentQuery;

#[Object]
impl StudentQuery {
    /// Get a student by ID
    async fn student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
        let id = parse_id("student", &id)?;
        let student = student_client(ctx)?
            .get_student(id)
            .await
            .or_degraded("get_student");
        Ok(student.map(Student::from))
    }

    /// List all students
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let students = student_client(ctx)?
            .list_students()
            .await
            .or_degraded("list_students");
        Ok(students.into_iter().map(Student::from).collect())
    }

    /// Search students by name, university or id
    async fn search_students(&self, ctx: &Context<'_>, keyword: String) -> Result<Vec<Student>> {
        let students = student_client(ctx)?
            .search_students(&keyword)
            .await
            .or_degraded("search_students");
        Ok(students.into_iter().map(Student::from).collect())
    }

    /// Students attending a university
    async fn students_by_university(
        &self,
        ctx: &Context<'_>,
        university_id: ID,
    ) -> Result<Vec<Student>> {
        let university_id = parse_id("university", &university_id)?;
        let students = student_client(ctx)?
            .list_students_by_university(university_id)
            .await
            .or_degraded("list_students_by_university");
        Ok(students.into_iter().map(Student::from).collect())
    }

    /// Get a student by ID, intended for selecting `courses` alongside
    async fn student_with_courses(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
        self.student(ctx, id).await
    }

    /// Get a student by email address
    async fn student_by_email(&self, ctx: &Context<'_>, email: String) -> Result<Option<Student>> {
        let student = student_client(ctx)?
            .get_student_by_email(&email)
            .await
            .or_degraded("get_student_by_email");
        Ok(student.map(Student::from))
    }
}
