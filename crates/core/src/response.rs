use serde::Deserialize;

use crate::code::Match;
use crate::error::LookupError;

/// Body returned by the autocomplete endpoint.
///
/// Variants are tried in order, so a body carrying an `error` field is a
/// failure even when it also carries `results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Error { error: String },
    Results { results: Vec<Match> },
    List(Vec<Match>),
}

impl SearchResponse {
    /// Parse a raw response body and unwrap it into matches
    pub fn parse(body: &[u8]) -> Result<Vec<Match>, LookupError> {
        let response: SearchResponse = serde_json::from_slice(body)?;
        response.into_matches()
    }

    pub fn into_matches(self) -> Result<Vec<Match>, LookupError> {
        match self {
            SearchResponse::Error { error } => Err(LookupError::Server(error)),
            SearchResponse::Results { results } => Ok(results),
            SearchResponse::List(matches) => Ok(matches),
        }
    }
}
