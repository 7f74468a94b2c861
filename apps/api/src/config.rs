//! API server configuration

use std::env;

use anyhow::Result;
use campus_shared_config::{parse_env, CommonConfig, Environment, ServicesConfig};

/// Default port for the gateway
pub const DEFAULT_PORT: u16 = 8002;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the service clients
    pub common: CommonConfig,

    /// Server port (default: 8002)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        Ok(Self {
            common,

            port: parse_env("PORT", DEFAULT_PORT)?,

            cors_allowed_origins: env::var("CORS_ORIGINS")
                .ok()
                .map(|s| parse_origins(&s)),
        })
    }

    /// Upstream service endpoints
    pub fn services(&self) -> &ServicesConfig {
        &self.common.services
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
