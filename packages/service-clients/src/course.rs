//! Course service client (courses and enrollments)
//!
//! The course service is a Django REST framework app: every path ends with a
//! trailing slash, and filters are query parameters on the list endpoints.

use campus_shared_config::ServiceEndpointConfig;
use reqwest::Method;
use tracing::{debug, instrument};

use crate::error::ServiceResult;
use crate::http::RestClient;
use crate::models::{
    Course, CourseDraft, CourseRoster, EnrollResponse, Enrollment, EnrollmentRequest,
};

/// Client for the course service REST API
#[derive(Debug, Clone)]
pub struct CourseClient {
    rest: RestClient,
}

impl CourseClient {
    /// Create a client for the service at `endpoint`
    pub fn new(endpoint: &ServiceEndpointConfig) -> ServiceResult<Self> {
        Ok(Self {
            rest: RestClient::new(endpoint)?,
        })
    }

    /// Create a client with a custom HTTP client (for testing)
    pub fn with_client(
        endpoint: &ServiceEndpointConfig,
        http_client: reqwest::Client,
    ) -> ServiceResult<Self> {
        Ok(Self {
            rest: RestClient::with_client(endpoint, http_client)?,
        })
    }

    /// Copy of this client that forwards the caller's role header
    pub fn with_caller_role(&self, role: Option<&str>) -> Self {
        Self {
            rest: self.rest.with_caller_role(role),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    async fn list_courses_where(&self, query: &[(&str, &str)]) -> ServiceResult<Vec<Course>> {
        let courses: Vec<Course> = self.rest.get_json(&["api", "courses", ""], query).await?;
        debug!(count = courses.len(), "Fetched courses");
        Ok(courses)
    }

    // ========== Courses ==========

    #[instrument(skip(self))]
    pub async fn list_courses(&self) -> ServiceResult<Vec<Course>> {
        self.list_courses_where(&[]).await
    }

    /// Returns `Ok(None)` when the service answers 404
    #[instrument(skip(self))]
    pub async fn get_course(&self, id: i64) -> ServiceResult<Option<Course>> {
        self.rest
            .get_optional(&["api", "courses", &id.to_string(), ""])
            .await
    }

    /// Case-insensitive match on name, instructor or category
    #[instrument(skip(self))]
    pub async fn search_courses(&self, keyword: &str) -> ServiceResult<Vec<Course>> {
        self.list_courses_where(&[("search", keyword)]).await
    }

    #[instrument(skip(self))]
    pub async fn list_courses_by_category(&self, category: &str) -> ServiceResult<Vec<Course>> {
        self.list_courses_where(&[("category", category)]).await
    }

    #[instrument(skip(self))]
    pub async fn list_courses_by_instructor(
        &self,
        instructor: &str,
    ) -> ServiceResult<Vec<Course>> {
        self.list_courses_where(&[("instructor", instructor)]).await
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_course(&self, draft: &CourseDraft) -> ServiceResult<Course> {
        self.rest
            .send_json(Method::POST, &["api", "courses", ""], draft)
            .await
    }

    #[instrument(skip(self, draft))]
    pub async fn update_course(&self, id: i64, draft: &CourseDraft) -> ServiceResult<Course> {
        self.rest
            .send_json(Method::PUT, &["api", "courses", &id.to_string(), ""], draft)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_course(&self, id: i64) -> ServiceResult<()> {
        self.rest
            .send_discarding::<()>(
                Method::DELETE,
                &["api", "courses", &id.to_string(), ""],
                None,
            )
            .await
    }

    // ========== Enrollments ==========

    #[instrument(skip(self))]
    pub async fn list_enrollments(&self) -> ServiceResult<Vec<Enrollment>> {
        self.rest.get_json(&["api", "enrollments", ""], &[]).await
    }

    #[instrument(skip(self))]
    pub async fn list_enrollments_by_student(
        &self,
        student_id: i64,
    ) -> ServiceResult<Vec<Enrollment>> {
        let student_id = student_id.to_string();
        self.rest
            .get_json(&["api", "enrollments", ""], &[("student_id", student_id.as_str())])
            .await
    }

    /// Enrollment records of one course, in the order the service returns them
    #[instrument(skip(self))]
    pub async fn list_course_enrollments(&self, course_id: i64) -> ServiceResult<Vec<Enrollment>> {
        let roster: CourseRoster = self
            .rest
            .get_json(&["api", "courses", &course_id.to_string(), "students", ""], &[])
            .await?;
        debug!(count = roster.enrollments.len(), "Fetched course roster");
        Ok(roster.enrollments)
    }

    #[instrument(skip(self))]
    pub async fn enroll(&self, course_id: i64, student_id: i64) -> ServiceResult<Enrollment> {
        let response: EnrollResponse = self
            .rest
            .send_json(
                Method::POST,
                &["api", "courses", &course_id.to_string(), "enroll", ""],
                &EnrollmentRequest { student_id },
            )
            .await?;
        Ok(response.enrollment)
    }

    #[instrument(skip(self))]
    pub async fn unenroll(&self, course_id: i64, student_id: i64) -> ServiceResult<()> {
        self.rest
            .send_discarding(
                Method::DELETE,
                &["api", "courses", &course_id.to_string(), "unenroll", ""],
                Some(&EnrollmentRequest { student_id }),
            )
            .await
    }

    /// Check if the course service is reachable
    pub async fn health_check(&self) -> ServiceResult<bool> {
        self.rest.probe(&["api", "courses", ""]).await
    }
}
