//! Wire records exchanged with the upstream services
//!
//! The student service (Spring) speaks camelCase JSON, the course and chatbot
//! services (Django REST framework) speak snake_case. Records are passed
//! through unchanged; nothing here assigns or rewrites identifiers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Student service
// =============================================================================

/// University as returned by the student service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Student as returned by the student service, with its university embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub university: Option<University>,
}

/// Reference to a university by id, as expected inside a student write body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniversityRef {
    pub id: i64,
}

/// Body for creating or replacing a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<UniversityRef>,
}

/// Body for creating or replacing a university
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversityDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// =============================================================================
// Course service
// =============================================================================

/// Course as returned by the course service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub category: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating or replacing a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDraft {
    pub name: String,
    pub instructor: String,
    pub category: String,
    pub schedule: String,
}

/// Enrollment join record owned by the course service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    /// Id of the course (the course service names this field `course`)
    #[serde(rename = "course")]
    pub course_id: i64,
    #[serde(default)]
    pub enrolled_at: Option<DateTime<Utc>>,
}

/// Response of `GET /api/courses/{id}/students/`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CourseRoster {
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

/// Response of `POST /api/courses/{id}/enroll/`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EnrollResponse {
    pub enrollment: Enrollment,
}

/// Body of enroll and unenroll requests
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct EnrollmentRequest {
    pub student_id: i64,
}

// =============================================================================
// Chatbot service
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TranslateRequest<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
}

/// Translation produced by the chatbot service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub source_language_name: Option<String>,
    #[serde(default)]
    pub target_language_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SummarizeRequest<'a> {
    pub text: &'a str,
    pub max_length: u32,
    pub min_length: u32,
}

/// Summary produced by the chatbot service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Summary {
    pub original_text: String,
    pub summary: String,
    pub original_length: u32,
    pub summary_length: u32,
    pub original_word_count: u32,
    pub summary_word_count: u32,
}

/// Raw response of `GET /api/languages/`: a `code -> name` map
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSupportedLanguages {
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// One language the chatbot can translate between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Supported languages flattened into a list ordered by code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    pub languages: Vec<Language>,
    pub count: u32,
}

impl From<RawSupportedLanguages> for SupportedLanguages {
    fn from(raw: RawSupportedLanguages) -> Self {
        let languages: Vec<Language> = raw
            .languages
            .into_iter()
            .map(|(code, name)| Language { code, name })
            .collect();
        let count = raw.count.unwrap_or(languages.len() as u32);
        Self { languages, count }
    }
}
