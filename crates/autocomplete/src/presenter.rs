//! Presentation callbacks for lookup results

use icd_core::Match;

/// Receives whatever the controller decides should be on screen
pub trait Presenter {
    /// Replace the suggestion list. An empty slice closes it.
    fn show_matches(&mut self, matches: &[Match]);

    /// Tell the user suggestions are unavailable and how to proceed
    fn show_fallback(&mut self, message: &str);
}

/// One rendered row of the suggestion list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
    pub data: Match,
}

impl From<&Match> for Suggestion {
    fn from(m: &Match) -> Self {
        Self {
            label: m.label(),
            value: m.value().to_string(),
            data: m.clone(),
        }
    }
}

/// Suggestion list backing a form-wired code input
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    suggestions: Vec<Suggestion>,
    notice: Option<String>,
}

impl Dropdown {
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

impl Presenter for Dropdown {
    fn show_matches(&mut self, matches: &[Match]) {
        self.suggestions = matches.iter().map(Suggestion::from).collect();
        self.notice = None;
    }

    fn show_fallback(&mut self, message: &str) {
        self.suggestions.clear();
        self.notice = Some(message.to_string());
    }
}

/// Emits results as trace events instead of rendering them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracePresenter;

impl Presenter for TracePresenter {
    fn show_matches(&mut self, matches: &[Match]) {
        let codes: Vec<&str> = matches.iter().map(|m| m.code.as_str()).collect();
        tracing::info!(count = matches.len(), codes = ?codes, "ICD-11 matches");
    }

    fn show_fallback(&mut self, message: &str) {
        tracing::warn!(notice = message, "ICD-11 suggestions unavailable");
    }
}
