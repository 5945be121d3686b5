use serde::{Deserialize, Serialize};

/// A single ICD-11 code suggested by the search endpoint.
///
/// Wire fields are snake_case. `foundationUri` is accepted on input for
/// endpoints that emit camelCase, but output always uses `foundation_uri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub code: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        alias = "foundationUri",
        skip_serializing_if = "Option::is_none"
    )]
    pub foundation_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
}

impl Match {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: None,
            foundation_uri: None,
            chapter: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_foundation_uri(mut self, uri: impl Into<String>) -> Self {
        self.foundation_uri = Some(uri.into());
        self
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    /// Text shown in a suggestion list, e.g. `BA00 - Acute appendicitis`
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.title)
    }

    /// Value written back into the code input when chosen
    pub fn value(&self) -> &str {
        &self.code
    }
}
