//! GraphQL schema builder for the campus gateway
//!
//! The service clients are injected here as schema data; resolvers read them
//! from the context rather than from globals.

use async_graphql::{EmptySubscription, Schema};
use campus_service_clients::{ChatbotClient, CourseClient, StudentClient};

use super::mutation::{Mutation, MUTATION_DOMAINS};
use super::query::{Query, QUERY_DOMAINS};
use super::registry::{check_disjoint, RegistryError};

/// The campus GraphQL schema type
pub type CampusSchema = Schema<Query, Mutation, EmptySubscription>;

/// Errors raised while assembling the schema
#[derive(thiserror::Error, Debug)]
pub enum SchemaError {
    #[error("{0} client is required")]
    MissingClient(&'static str),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Builder for constructing the GraphQL schema with the upstream clients
#[derive(Default)]
pub struct SchemaBuilder {
    student_client: Option<StudentClient>,
    course_client: Option<CourseClient>,
    chatbot_client: Option<ChatbotClient>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the student service client
    pub fn student_client(mut self, client: StudentClient) -> Self {
        self.student_client = Some(client);
        self
    }

    /// Set the course service client
    pub fn course_client(mut self, client: CourseClient) -> Self {
        self.course_client = Some(client);
        self
    }

    /// Set the chatbot service client
    pub fn chatbot_client(mut self, client: ChatbotClient) -> Self {
        self.chatbot_client = Some(client);
        self
    }

    /// Build the schema with all configured clients
    ///
    /// Fails if a client is missing or two resolver domains declare the same
    /// root field.
    pub fn build(self) -> Result<CampusSchema, SchemaError> {
        check_disjoint("Query", QUERY_DOMAINS)?;
        check_disjoint("Mutation", MUTATION_DOMAINS)?;

        let student_client = self
            .student_client
            .ok_or(SchemaError::MissingClient("student"))?;
        let course_client = self
            .course_client
            .ok_or(SchemaError::MissingClient("course"))?;
        let chatbot_client = self
            .chatbot_client
            .ok_or(SchemaError::MissingClient("chatbot"))?;

        Ok(
            Schema::build(Query::default(), Mutation::default(), EmptySubscription)
                .data(student_client)
                .data(course_client)
                .data(chatbot_client)
                .finish(),
        )
    }
}

/// Create a new GraphQL schema with the provided clients
pub fn build_schema(
    student_client: StudentClient,
    course_client: CourseClient,
    chatbot_client: ChatbotClient,
) -> Result<CampusSchema, SchemaError> {
    SchemaBuilder::new()
        .student_client(student_client)
        .course_client(course_client)
        .chatbot_client(chatbot_client)
        .build()
}
