//! Per-request context helpers shared by resolvers

use async_graphql::{Context, ErrorExtensions, Result, ID};
use campus_service_clients::{ChatbotClient, CourseClient, StudentClient};

use crate::error::ApiError;

/// Role of the caller, taken from the `X-User-Role` request header
///
/// Forwarded unchanged to the student and course services, which enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerRole(pub String);

fn caller_role<'a>(ctx: &'a Context<'_>) -> Option<&'a str> {
    ctx.data_opt::<CallerRole>().map(|role| role.0.as_str())
}

/// Student client bound to the current caller's role
pub fn student_client(ctx: &Context<'_>) -> Result<StudentClient> {
    let client = ctx.data::<StudentClient>()?;
    Ok(client.with_caller_role(caller_role(ctx)))
}

/// Course client bound to the current caller's role
pub fn course_client(ctx: &Context<'_>) -> Result<CourseClient> {
    let client = ctx.data::<CourseClient>()?;
    Ok(client.with_caller_role(caller_role(ctx)))
}

pub fn chatbot_client<'a>(ctx: &Context<'a>) -> Result<&'a ChatbotClient> {
    ctx.data::<ChatbotClient>()
}

/// Parse a GraphQL ID into an upstream numeric id
pub fn parse_id(resource_type: &'static str, id: &ID) -> Result<i64> {
    id.parse::<i64>()
        .map_err(|_| ApiError::invalid_id(resource_type, id.as_str()).extend())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_id() {
        assert_eq!(parse_id("student", &ID::from("42")).unwrap(), 42);
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = parse_id("course", &ID::from("abc")).unwrap_err();
        assert_eq!(err.message, "invalid course ID: abc");
    }
}
