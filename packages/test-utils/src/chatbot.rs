//! Mock chatbot service for testing translation and summarization
//!
//! Provides a [`MockChatbotService`] that simulates the chatbot REST API
//! without loading any models.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chatbot service for testing translation and summarization
///
/// # Example
///
/// ```rust,ignore
/// use campus_test_utils::MockChatbotService;
///
/// #[tokio::test]
/// async fn test_translate() {
///     let service = MockChatbotService::start().await;
///     service.mock_translate_success("Bonjour").await;
///
///     // Configure your ChatbotClient with service.url()
/// }
/// ```
pub struct MockChatbotService {
    server: MockServer,
}

impl MockChatbotService {
    /// Start a new mock chatbot service
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a mock for a successful English to French translation
    pub async fn mock_translate_success(&self, translated_text: &str) {
        Mock::given(method("POST"))
            .and(path("/api/translate/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "original_text": "Hello",
                "translated_text": translated_text,
                "source_language": "en_XX",
                "target_language": "fr_XX",
                "source_language_name": "English",
                "target_language_name": "French"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for translation failure
    pub async fn mock_translate_failure(&self, status_code: u16, error_message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/translate/"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": error_message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a successful summarization
    pub async fn mock_summarize_success(&self, summary: &str) {
        Mock::given(method("POST"))
            .and(path("/api/summarize/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "original_text": "A long text about distributed systems.",
                "summary": summary,
                "original_length": 38,
                "summary_length": summary.len(),
                "original_word_count": 6,
                "summary_word_count": summary.split_whitespace().count()
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for summarization failure
    pub async fn mock_summarize_failure(&self, status_code: u16, error_message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/summarize/"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": error_message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the language list
    pub async fn mock_languages(&self, languages: &[(&str, &str)]) {
        let map: serde_json::Map<String, serde_json::Value> = languages
            .iter()
            .map(|(code, name)| (code.to_string(), json!(name)))
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/languages/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "languages": map,
                "count": languages.len()
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the health endpoint
    pub async fn mock_health(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/health/"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "status": if status_code < 500 { "healthy" } else { "unhealthy" },
                "service": "Chatbot Translation Service"
            })))
            .mount(&self.server)
            .await;
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chatbot_translate() {
        let service = MockChatbotService::start().await;
        service.mock_translate_success("Bonjour").await;

        let body: serde_json::Value = reqwest::Client::new()
            .post(format!("{}/api/translate/", service.url()))
            .json(&json!({"text": "Hello", "source_lang": "en_XX", "target_lang": "fr_XX"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["translated_text"], "Bonjour");
    }

    #[tokio::test]
    async fn test_mock_chatbot_languages() {
        let service = MockChatbotService::start().await;
        service
            .mock_languages(&[("en_XX", "English"), ("fr_XX", "French")])
            .await;

        let body: serde_json::Value = reqwest::get(format!("{}/api/languages/", service.url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["count"], 2);
        assert_eq!(body["languages"]["fr_XX"], "French");
    }
}
