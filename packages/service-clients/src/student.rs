//! Student service client (students and universities)

use campus_shared_config::ServiceEndpointConfig;
use reqwest::Method;
use tracing::{debug, instrument};

use crate::error::ServiceResult;
use crate::http::RestClient;
use crate::models::{Student, StudentDraft, University, UniversityDraft};

/// Client for the student service REST API
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct StudentClient {
    rest: RestClient,
}

impl StudentClient {
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

    // ========== Students ==========

    #[instrument(skip(self))]
    pub async fn list_students(&self) -> ServiceResult<Vec<Student>> {
        let students: Vec<Student> = self.rest.get_json(&["api", "students"], &[]).await?;
        debug!(count = students.len(), "Fetched students");
        Ok(students)
    }

    /// Returns `Ok(None)` when the service answers 404
    #[instrument(skip(self))]
    pub async fn get_student(&self, id: i64) -> ServiceResult<Option<Student>> {
        self.rest
            .get_optional(&["api", "students", &id.to_string()])
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_student_by_email(&self, email: &str) -> ServiceResult<Option<Student>> {
        self.rest
            .get_optional(&["api", "students", "email", email])
            .await
    }

    /// Search by name, id or university name
    #[instrument(skip(self))]
    pub async fn search_students(&self, keyword: &str) -> ServiceResult<Vec<Student>> {
        self.rest
            .get_json(&["api", "students", "search"], &[("keyword", keyword)])
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_students_by_university(
        &self,
        university_id: i64,
    ) -> ServiceResult<Vec<Student>> {
        self.rest
            .get_json(
                &["api", "students", "university", &university_id.to_string()],
                &[],
            )
            .await
    }

    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn create_student(&self, draft: &StudentDraft) -> ServiceResult<Student> {
        self.rest
            .send_json(Method::POST, &["api", "students"], draft)
            .await
    }

    #[instrument(skip(self, draft))]
    pub async fn update_student(&self, id: i64, draft: &StudentDraft) -> ServiceResult<Student> {
        self.rest
            .send_json(Method::PUT, &["api", "students", &id.to_string()], draft)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: i64) -> ServiceResult<()> {
        self.rest
            .send_discarding::<()>(Method::DELETE, &["api", "students", &id.to_string()], None)
            .await
    }

    // ========== Universities ==========

    #[instrument(skip(self))]
    pub async fn list_universities(&self) -> ServiceResult<Vec<University>> {
        self.rest.get_json(&["api", "universities"], &[]).await
    }

    #[instrument(skip(self))]
    pub async fn get_university(&self, id: i64) -> ServiceResult<Option<University>> {
        self.rest
            .get_optional(&["api", "universities", &id.to_string()])
            .await
    }

    #[instrument(skip(self))]
    pub async fn search_universities(&self, name: &str) -> ServiceResult<Vec<University>> {
        self.rest
            .get_json(&["api", "universities", "search"], &[("name", name)])
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_universities_by_location(
        &self,
        location: &str,
    ) -> ServiceResult<Vec<University>> {
        self.rest
            .get_json(&["api", "universities", "location", location], &[])
            .await
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_university(&self, draft: &UniversityDraft) -> ServiceResult<University> {
        self.rest
            .send_json(Method::POST, &["api", "universities"], draft)
            .await
    }

    #[instrument(skip(self, draft))]
    pub async fn update_university(
        &self,
        id: i64,
        draft: &UniversityDraft,
    ) -> ServiceResult<University> {
        self.rest
            .send_json(Method::PUT, &["api", "universities", &id.to_string()], draft)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_university(&self, id: i64) -> ServiceResult<()> {
        self.rest
            .send_discarding::<()>(
                Method::DELETE,
                &["api", "universities", &id.to_string()],
                None,
            )
            .await
    }

    /// Check if the student service is reachable
    pub async fn health_check(&self) -> ServiceResult<bool> {
        self.rest.probe(&["api", "universities"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UniversityRef;
    use crate::ServiceError;
    use assert_matches::assert_matches;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> StudentClient {
        let endpoint = ServiceEndpointConfig::new("student", server.uri()).unwrap();
        StudentClient::new(&endpoint).unwrap()
    }

    fn alice() -> serde_json::Value {
        json!({
            "id": 10,
            "firstName": "Alice",
            "lastName": "Martin",
            "email": "alice@example.com",
            "university": {"id": 1, "name": "ENSA", "location": "Tetouan"}
        })
    }

    #[tokio::test]
    async fn test_list_students() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([alice()])))
            .mount(&server)
            .await;

        let students = client_for(&server).list_students().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].university.as_ref().unwrap().name, "ENSA");
    }

    #[tokio::test]
    async fn test_get_student_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/students/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let student = client_for(&server).get_student(42).await.unwrap();
        assert!(student.is_none());
    }

    #[tokio::test]
    async fn test_search_students_passes_keyword() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/students/search"))
            .and(query_param("keyword", "ali"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([alice()])))
            .expect(1)
            .mount(&server)
            .await;

        let students = client_for(&server).search_students("ali").await.unwrap();
        assert_eq!(students[0].id, 10);
    }

    #[tokio::test]
    async fn test_search_universities_passes_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/universities/search"))
            .and(query_param("name", "ENSA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "ENSA", "location": "Tetouan"}
            ])))
            .mount(&server)
            .await;

        let universities = client_for(&server).search_universities("ENSA").await.unwrap();
        assert_eq!(universities.len(), 1);
    }

    #[tokio::test]
    async fn test_create_student_sends_university_reference() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/students"))
            .and(body_json(json!({
                "firstName": "Alice",
                "lastName": "Martin",
                "email": "alice@example.com",
                "university": {"id": 1}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(alice()))
            .mount(&server)
            .await;

        let draft = StudentDraft {
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
            email: "alice@example.com".to_string(),
            university: Some(UniversityRef { id: 1 }),
        };
        let created = client_for(&server).create_student(&draft).await.unwrap();
        assert_eq!(created.id, 10);
    }

    #[tokio::test]
    async fn test_write_failure_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/students/10"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({"error": "Access denied: Admin role required"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).delete_student(10).await;
        assert_matches!(result, Err(ServiceError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/universities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        assert!(client_for(&server).health_check().await.unwrap());
    }
}
