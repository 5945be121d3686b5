//! HTTP client for the ICD-11 autocomplete endpoint

use icd_core::{LookupError, Match, SearchResponse};
use reqwest::header::ACCEPT;

use crate::config::AutocompleteConfig;
use crate::lookup::SearchBackend;

/// Client for `GET <endpoint>?<param>=<text>`
#[derive(Clone)]
pub struct IcdClient {
    http: reqwest::Client,
    endpoint: String,
    query_param: String,
}

impl IcdClient {
    /// Create a client using the endpoint and timeout from `config`
    pub fn new(config: &AutocompleteConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            query_param: config.query_param.clone(),
        })
    }

    /// Search for codes or titles matching `text`
    pub async fn fetch(&self, text: &str) -> Result<Vec<Match>, LookupError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[(self.query_param.as_str(), text)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        if !status.is_success() {
            // Error-shaped bodies still carry the most useful message
            if let Ok(SearchResponse::Error { error }) =
                serde_json::from_slice::<SearchResponse>(&body)
            {
                return Err(LookupError::Server(error));
            }
            return Err(LookupError::Status(status.as_u16()));
        }

        SearchResponse::parse(&body)
    }
}

impl SearchBackend for IcdClient {
    async fn search(&self, text: &str) -> Result<Vec<Match>, LookupError> {
        self.fetch(text).await
    }
}
