//! Common test utilities for integration tests
//!
//! Builds a gateway schema whose clients point at the wiremock-backed
//! upstreams from `campus-test-utils`.

#![allow(dead_code)]

use async_graphql::{Request, Response};
use campus_api::{build_schema, CallerRole, CampusSchema, HealthService};
use campus_service_clients::{ChatbotClient, CourseClient, StudentClient};
use campus_shared_config::ServicesConfig;
use campus_test_utils::{
    CourseFixture, MockChatbotService, MockCourseService, MockStudentService, StudentFixture,
    UniversityFixture,
};
use serde_json::Value;

/// The three upstream mocks plus a schema wired to them
pub struct TestGateway {
    pub students: MockStudentService,
    pub courses: MockCourseService,
    pub chatbot: MockChatbotService,
    pub schema: CampusSchema,
}

impl TestGateway {
    /// Start empty mocks and build the schema
    pub async fn start() -> Self {
        let students = MockStudentService::start().await;
        let courses = MockCourseService::start().await;
        let chatbot = MockChatbotService::start().await;
        Self::with_mocks(students, courses, chatbot)
    }

    /// Build the schema over already started mocks
    pub fn with_mocks(
        students: MockStudentService,
        courses: MockCourseService,
        chatbot: MockChatbotService,
    ) -> Self {
        let schema = schema_for(&students.url(), &courses.url(), &chatbot.url());
        Self {
            students,
            courses,
            chatbot,
            schema,
        }
    }

    /// Seed the canonical scenario: ENSA, Alice (10) and Bob (11), course 1
    /// "Algorithms" with Alice enrolled
    pub async fn seeded() -> Self {
        let gateway = Self::start().await;
        let ensa = ensa();
        gateway.students.add_university(ensa.clone());
        gateway.students.add_student(StudentFixture::new(10, "Alice", &ensa));
        gateway.students.add_student(StudentFixture::new(11, "Bob", &ensa));
        gateway
            .courses
            .add_course(CourseFixture::new(1, "Algorithms", "Knuth", "CS"));
        gateway
            .courses
            .add_course(CourseFixture::new(2, "Databases", "Codd", "CS"));
        gateway.courses.enroll(1, 10);
        gateway
    }

    /// Execute a GraphQL document without a caller role
    pub async fn execute(&self, query: &str) -> Response {
        self.schema.execute(Request::new(query)).await
    }

    /// Execute a GraphQL document on behalf of `role`
    pub async fn execute_as(&self, role: &str, query: &str) -> Response {
        self.schema
            .execute(Request::new(query).data(CallerRole(role.to_string())))
            .await
    }

    /// Execute and return `data` as JSON, asserting there were no errors
    pub async fn data(&self, query: &str) -> Value {
        let response = self.execute(query).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response_json(response)
    }

    /// Health service over the same mocks
    pub fn health_service(&self) -> HealthService {
        let (student, course, chatbot) =
            clients_for(&self.students.url(), &self.courses.url(), &self.chatbot.url());
        HealthService::new(student, course, chatbot)
    }
}

pub fn ensa() -> UniversityFixture {
    UniversityFixture::new(1, "ENSA", "Tetouan")
}

pub fn clients_for(
    student_url: &str,
    course_url: &str,
    chatbot_url: &str,
) -> (StudentClient, CourseClient, ChatbotClient) {
    let services = ServicesConfig::with_urls(student_url, course_url, chatbot_url)
        .expect("mock URLs are valid");
    (
        StudentClient::new(&services.student).expect("student client"),
        CourseClient::new(&services.course).expect("course client"),
        ChatbotClient::new(&services.chatbot).expect("chatbot client"),
    )
}

pub fn schema_for(student_url: &str, course_url: &str, chatbot_url: &str) -> CampusSchema {
    let (student, course, chatbot) = clients_for(student_url, course_url, chatbot_url);
    build_schema(student, course, chatbot).expect("schema builds")
}

/// Convert the `data` of a response into plain JSON
pub fn response_json(response: Response) -> Value {
    response.data.into_json().expect("data converts to JSON")
}

/// Extract the `id` of every object in a JSON array
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("value is a list")
        .iter()
        .map(|item| item["id"].as_str().expect("id is a string").to_string())
        .collect()
}
