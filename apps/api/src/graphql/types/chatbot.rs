//! Chatbot result types (translation, summarization, languages)

use async_graphql::SimpleObject;
use campus_service_clients as clients;

/// Result of translating a text
#[derive(Debug, Clone, SimpleObject)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub source_language_name: Option<String>,
    pub target_language_name: Option<String>,
}

impl From<clients::Translation> for Translation {
    fn from(t: clients::Translation) -> Self {
        Self {
            original_text: t.original_text,
            translated_text: t.translated_text,
            source_language: t.source_language,
            target_language: t.target_language,
            source_language_name: t.source_language_name,
            target_language_name: t.target_language_name,
        }
    }
}

/// Result of summarizing a text
#[derive(Debug, Clone, SimpleObject)]
pub struct Summary {
    pub original_text: String,
    pub summary: String,
    pub original_length: u32,
    pub summary_length: u32,
    pub original_word_count: u32,
    pub summary_word_count: u32,
}

impl From<clients::Summary> for Summary {
    fn from(s: clients::Summary) -> Self {
        Self {
            original_text: s.original_text,
            summary: s.summary,
            original_length: s.original_length,
            summary_length: s.summary_length,
            original_word_count: s.original_word_count,
            summary_word_count: s.summary_word_count,
        }
    }
}

/// A language the translator accepts, by its model code
#[derive(Debug, Clone, SimpleObject)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct SupportedLanguages {
    pub languages: Vec<Language>,
    pub count: u32,
}

impl From<clients::SupportedLanguages> for SupportedLanguages {
    fn from(s: clients::SupportedLanguages) -> Self {
        Self {
            languages: s
                .languages
                .into_iter()
                .map(|l| Language {
                    code: l.code,
                    name: l.name,
                })
                .collect(),
            count: s.count,
        }
    }
}
