//! Autocomplete configuration

use std::str::FromStr;
use std::time::Duration;

use crate::form::FieldIds;

/// Message shown when no suggestions can be offered
pub const DEFAULT_FALLBACK_MESSAGE: &str = "ICD-11 autocomplete failed. Please enter the code manually using the ICD-11 Browser: https://icd.who.int/browse11/l-m/en";

/// Controller and client settings
#[derive(Debug, Clone)]
pub struct AutocompleteConfig {
    pub endpoint: String,
    pub query_param: String,
    /// Shortest input (in characters) that triggers a lookup
    pub min_length: usize,
    pub quiet_period: Duration,
    pub request_timeout: Duration,
    pub fallback_message: String,
    pub fields: FieldIds,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/ajax/icd11-autocomplete/".into(),
            query_param: "q".into(),
            min_length: 2,
            quiet_period: Duration::from_millis(250),
            request_timeout: Duration::from_millis(10_000),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.into(),
            fields: FieldIds::default(),
        }
    }
}

impl AutocompleteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    /// for missing or unparsable values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: lookup("ICD_AUTOCOMPLETE_URL").unwrap_or(defaults.endpoint),
            query_param: lookup("ICD_AUTOCOMPLETE_PARAM").unwrap_or(defaults.query_param),
            min_length: parse_or(
                &lookup,
                "ICD_AUTOCOMPLETE_MIN_LENGTH",
                defaults.min_length,
            ),
            quiet_period: Duration::from_millis(parse_or(
                &lookup,
                "ICD_AUTOCOMPLETE_DEBOUNCE_MS",
                defaults.quiet_period.as_millis() as u64,
            )),
            request_timeout: Duration::from_millis(parse_or(
                &lookup,
                "ICD_AUTOCOMPLETE_TIMEOUT_MS",
                defaults.request_timeout.as_millis() as u64,
            )),
            fallback_message: defaults.fallback_message,
            fields: defaults.fields,
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable config value");
            default
        }),
        None => default,
    }
}
