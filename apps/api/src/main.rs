use std::net::SocketAddr;

use campus_api::{
    build_cors_layer, build_router, build_schema, config::Config, routes::HealthState,
    HealthService,
};
use campus_service_clients::{ChatbotClient, CourseClient, StudentClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!(
        environment = ?config.environment(),
        "Starting Campus GraphQL gateway on port {}",
        config.port
    );

    let services = config.services();
    let student_client = StudentClient::new(&services.student)?;
    let course_client = CourseClient::new(&services.course)?;
    let chatbot_client = ChatbotClient::new(&services.chatbot)?;

    tracing::info!(
        student = %services.student.url,
        course = %services.course.url,
        chatbot = %services.chatbot.url,
        "Upstream service clients initialized"
    );

    // Create health check state
    let health_state = HealthState::new(HealthService::new(
        student_client.clone(),
        course_client.clone(),
        chatbot_client.clone(),
    ));

    let schema = build_schema(student_client, course_client, chatbot_client)?;
    tracing::info!("GraphQL schema built");

    // Build the CORS layer from configuration
    let cors_layer = build_cors_layer(&config);

    let app = build_router(schema, health_state, cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL Playground available at http://{}:{}/graphql/playground",
        addr.ip(),
        addr.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
