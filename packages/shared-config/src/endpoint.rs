//! Upstream service endpoint configuration

use url::Url;

use crate::{get_env_or_default, ConfigError, ConfigResult};

/// Default base URL of the student service (Spring)
pub const DEFAULT_STUDENT_SERVICE_URL: &str = "http://localhost:8081";

/// Default base URL of the course service (Django)
pub const DEFAULT_COURSE_SERVICE_URL: &str = "http://localhost:8000";

/// Default base URL of the chatbot service (Django)
pub const DEFAULT_CHATBOT_SERVICE_URL: &str = "http://localhost:8001";

/// Location of one upstream REST service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpointConfig {
    /// Short service name used in logs and health reports
    pub name: &'static str,

    /// Base URL without trailing slash
    pub url: String,
}

impl ServiceEndpointConfig {
    /// Create an endpoint, validating that `url` is an absolute http(s) URL
    pub fn new(name: &'static str, url: impl Into<String>) -> ConfigResult<Self> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let parsed =
            Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(
                name.to_string(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            name,
            url: trimmed.to_string(),
        })
    }

    /// Load an endpoint from `var`, falling back to `default`
    pub fn from_env(name: &'static str, var: &str, default: &str) -> ConfigResult<Self> {
        Self::new(name, get_env_or_default(var, default))
            .map_err(|e| match e {
                ConfigError::InvalidUrl(_, reason) => ConfigError::InvalidUrl(var.to_string(), reason),
                other => other,
            })
    }

    /// Join a path onto the base URL
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

/// Endpoints of all upstream services the gateway composes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesConfig {
    pub student: ServiceEndpointConfig,
    pub course: ServiceEndpointConfig,
    pub chatbot: ServiceEndpointConfig,
}

impl ServicesConfig {
    /// Load all endpoints from `STUDENT_SERVICE_URL`, `COURSE_SERVICE_URL`
    /// and `CHATBOT_SERVICE_URL`
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            student: ServiceEndpointConfig::from_env(
                "student",
                "STUDENT_SERVICE_URL",
                DEFAULT_STUDENT_SERVICE_URL,
            )?,
            course: ServiceEndpointConfig::from_env(
                "course",
                "COURSE_SERVICE_URL",
                DEFAULT_COURSE_SERVICE_URL,
            )?,
            chatbot: ServiceEndpointConfig::from_env(
                "chatbot",
                "CHATBOT_SERVICE_URL",
                DEFAULT_CHATBOT_SERVICE_URL,
            )?,
        })
    }

    /// Point every service at explicit URLs (useful for testing)
    pub fn with_urls(
        student: impl Into<String>,
        course: impl Into<String>,
        chatbot: impl Into<String>,
    ) -> ConfigResult<Self> {
        Ok(Self {
            student: ServiceEndpointConfig::new("student", student)?,
            course: ServiceEndpointConfig::new("course", course)?,
            chatbot: ServiceEndpointConfig::new("chatbot", chatbot)?,
        })
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            student: ServiceEndpointConfig {
                name: "student",
                url: DEFAULT_STUDENT_SERVICE_URL.to_string(),
            },
            course: ServiceEndpointConfig {
                name: "course",
                url: DEFAULT_COURSE_SERVICE_URL.to_string(),
            },
            chatbot: ServiceEndpointConfig {
                name: "chatbot",
                url: DEFAULT_CHATBOT_SERVICE_URL.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = ServicesConfig::default();
        assert_eq!(config.student.url, "http://localhost:8081");
        assert_eq!(config.course.url, "http://localhost:8000");
        assert_eq!(config.chatbot.url, "http://localhost:8001");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoint = ServiceEndpointConfig::new("course", "http://courses:8000/").unwrap();
        assert_eq!(endpoint.url, "http://courses:8000");
        assert_eq!(endpoint.join("/api/courses/"), "http://courses:8000/api/courses/");
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://files.example.com")]
    #[case("")]
    fn test_invalid_urls_rejected(#[case] url: &str) {
        let result = ServiceEndpointConfig::new("student", url);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_, _))));
    }

    #[test]
    fn test_with_urls() {
        let config = ServicesConfig::with_urls(
            "http://127.0.0.1:1",
            "http://127.0.0.1:2",
            "https://chat.example.com",
        )
        .unwrap();
        assert_eq!(config.student.name, "student");
        assert_eq!(config.course.url, "http://127.0.0.1:2");
        assert_eq!(config.chatbot.url, "https://chat.example.com");
    }
}
