//! Chatbot service client (translation and summarization)

use campus_shared_config::ServiceEndpointConfig;
use reqwest::Method;
use tracing::{debug, instrument};

use crate::error::ServiceResult;
use crate::http::RestClient;
use crate::models::{
    RawSupportedLanguages, SummarizeRequest, Summary, SupportedLanguages, TranslateRequest,
    Translation,
};

/// Default upper bound on summary length, in model tokens
pub const DEFAULT_SUMMARY_MAX_LENGTH: u32 = 150;

/// Default lower bound on summary length, in model tokens
pub const DEFAULT_SUMMARY_MIN_LENGTH: u32 = 50;

/// Client for the chatbot service REST API
///
/// Requests are stateless; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ChatbotClient {
    rest: RestClient,
}

impl ChatbotClient {
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

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> ServiceResult<Translation> {
        let request = TranslateRequest {
            text,
            source_lang,
            target_lang,
        };
        let translation: Translation = self
            .rest
            .send_json(Method::POST, &["api", "translate", ""], &request)
            .await?;

        debug!(
            translated_len = translation.translated_text.len(),
            "Translation received"
        );
        Ok(translation)
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> ServiceResult<Summary> {
        let request = SummarizeRequest {
            text,
            max_length,
            min_length,
        };
        let summary: Summary = self
            .rest
            .send_json(Method::POST, &["api", "summarize", ""], &request)
            .await?;

        debug!(summary_len = summary.summary_length, "Summary received");
        Ok(summary)
    }

    #[instrument(skip(self))]
    pub async fn supported_languages(&self) -> ServiceResult<SupportedLanguages> {
        let raw: RawSupportedLanguages = self
            .rest
            .get_json(&["api", "languages", ""], &[])
            .await?;
        Ok(raw.into())
    }

    /// Check if the chatbot service is reachable
    pub async fn health_check(&self) -> ServiceResult<bool> {
        self.rest.probe(&["api", "health", ""]).await
    }
}
