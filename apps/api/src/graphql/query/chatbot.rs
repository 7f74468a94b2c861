//! Chatbot queries for the campus GraphQL API
//!
//! Translation and summarization are computations rather than listings, so
//! their failures surface as errors instead of empty results.

use async_graphql::{Context, Object, Result};
use campus_service_clients::{DEFAULT_SUMMARY_MAX_LENGTH, DEFAULT_SUMMARY_MIN_LENGTH};

use crate::graphql::context::chatbot_client;
use crate::graphql::degrade::ServiceResultExt;
use crate::graphql::registry::RootDomain;
use crate::graphql::types::{Summary, SupportedLanguages, Translation};

const DEFAULT_SOURCE_LANG: &str = "en_XX";
const DEFAULT_TARGET_LANG: &str = "fr_XX";

pub const DOMAIN: RootDomain = RootDomain {
    name: "ChatbotQuery",
    fields: &["translate", "summarize", "supportedLanguages"],
};

#[derive(Default)]
pub struct ChatbotQuery;

#[Object]
impl ChatbotQuery {
    /// Translate text between two model language codes (e.g. `en_XX`, `fr_XX`)
    async fn translate(
        &self,
        ctx: &Context<'_>,
        text: String,
        source_lang: Option<String>,
        target_lang: Option<String>,
    ) -> Result<Translation> {
        let translation = chatbot_client(ctx)?
            .translate(
                &text,
                source_lang.as_deref().unwrap_or(DEFAULT_SOURCE_LANG),
                target_lang.as_deref().unwrap_or(DEFAULT_TARGET_LANG),
            )
            .await
            .or_failure("Failed to translate text")?;
        Ok(translation.into())
    }

    /// Summarize text; lengths are in model tokens
    async fn summarize(
        &self,
        ctx: &Context<'_>,
        text: String,
        max_length: Option<u32>,
        min_length: Option<u32>,
    ) -> Result<Summary> {
        let summary = chatbot_client(ctx)?
            .summarize(
                &text,
                max_length.unwrap_or(DEFAULT_SUMMARY_MAX_LENGTH),
                min_length.unwrap_or(DEFAULT_SUMMARY_MIN_LENGTH),
            )
            .await
            .or_failure("Failed to summarize text")?;
        Ok(summary.into())
    }

    /// Languages the translator accepts
    async fn supported_languages(&self, ctx: &Context<'_>) -> Result<SupportedLanguages> {
        let languages = chatbot_client(ctx)?
            .supported_languages()
            .await
            .or_failure("Failed to fetch supported languages")?;
        Ok(languages.into())
    }
}
