//! HTTP application assembly
//!
//! Wires the GraphQL endpoint, the playground, health routes and the CORS and
//! tracing layers into one axum [`Router`].

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::{header, header::HeaderMap, HeaderName, Method},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::graphql::{CallerRole, CampusSchema};
use crate::routes::{self, health_router, HealthState};

/// Header carrying the caller's role, forwarded to the upstream services
pub const CALLER_ROLE_HEADER: HeaderName = HeaderName::from_static("x-user-role");

/// Build the CORS layer based on configuration.
///
/// In production mode:
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - If `CORS_ORIGINS` is not set, CORS requests are rejected (no origins allowed)
///
/// In development mode:
/// - If `CORS_ORIGINS` is set, those origins are used
/// - If `CORS_ORIGINS` is not set, permissive CORS is used for convenience
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([
                        header::CONTENT_TYPE,
                        header::ACCEPT,
                        header::ORIGIN,
                        CALLER_ROLE_HEADER,
                    ])
                    .allow_credentials(true)
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected. Set CORS_ORIGINS to allow cross-origin requests."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!(
                "Using permissive CORS in development mode. \
                 Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

/// Extract the caller role from the `X-User-Role` header
fn extract_caller_role(headers: &HeaderMap) -> Option<CallerRole> {
    headers
        .get(CALLER_ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(|role| CallerRole(role.to_string()))
}

/// GraphQL handler that executes queries against the schema
///
/// The caller role, when present, is injected into the request data so the
/// student and course clients forward it upstream.
async fn graphql_handler(
    Extension(schema): Extension<CampusSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(role) = extract_caller_role(&headers) {
        tracing::debug!(role = %role.0, "GraphQL request with caller role");
        request = request.data(role);
    }

    schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

async fn root() -> &'static str {
    "Welcome to the Campus GraphQL gateway"
}

/// Build the application router
pub fn build_router(schema: CampusSchema, health_state: HealthState, cors_layer: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        // GraphQL endpoints
        .route("/graphql", post(graphql_handler))
        .route("/graphql/playground", get(graphql_playground))
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(health_state))
        .fallback(routes::not_found)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_caller_role() {
        let mut headers = HeaderMap::new();
        headers.insert(CALLER_ROLE_HEADER, HeaderValue::from_static(" admin "));

        assert_eq!(
            extract_caller_role(&headers),
            Some(CallerRole("admin".to_string()))
        );
    }

    #[test]
    fn test_missing_or_blank_role_is_ignored() {
        assert_eq!(extract_caller_role(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(CALLER_ROLE_HEADER, HeaderValue::from_static("   "));
        assert_eq!(extract_caller_role(&headers), None);
    }
}
