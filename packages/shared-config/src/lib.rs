//! Shared configuration types for the campus gateway
//!
//! This crate provides the configuration used by the gateway server and the
//! upstream service clients, ensuring both read the same environment.

mod endpoint;
mod error;

pub use endpoint::{
    ServiceEndpointConfig, ServicesConfig, DEFAULT_CHATBOT_SERVICE_URL,
    DEFAULT_COURSE_SERVICE_URL, DEFAULT_STUDENT_SERVICE_URL,
};
pub use error::{ConfigError, ConfigResult};

use std::env;

/// Configuration shared between the gateway and tooling
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Upstream REST services
    pub services: ServicesConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log level (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            services: ServicesConfig::from_env()?,
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("NODE_ENV"))
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
