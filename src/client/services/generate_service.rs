//! The single outbound call to the generation endpoint.

use crate::client::models::generation::{ErrorReply, GenerationRequest, GenerationResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The endpoint answered with a non-success status; the message comes
    /// from its `error` field when present.
    #[error("{0}")]
    Server(String),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A success status whose body was not parseable JSON.
    #[error("Something went wrong")]
    MalformedResponse,
}

const GENERATE_PATH: &str = "/api/generate";
const DEFAULT_SERVER_ERROR: &str = "Failed to generate";

#[derive(Debug, Clone)]
pub struct GenerateService {
    client: reqwest::Client,
    api_base: String,
}

impl GenerateService {
    pub fn new(api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
        }
    }

    /// POST the request and parse the reply. No timeout or retry at this
    /// layer; the transport's own behavior applies.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerateError> {
        let endpoint = format!("{}{}", self.api_base.trim_end_matches('/'), GENERATE_PATH);
        log::info!("requesting generation from {}", endpoint);
        let response = self.client.post(&endpoint).json(request).send().await?;
        let ok = response.status().is_success();
        let body = response.text().await?;
        parse_response(ok, &body)
    }
}

/// Interpret the endpoint's reply. Split out of the I/O path so the status
/// and body handling is testable on its own.
pub(crate) fn parse_response(ok: bool, body: &str) -> Result<GenerationResult, GenerateError> {
    if !ok {
        let message = serde_json::from_str::<ErrorReply>(body)
            .ok()
            .and_then(|reply| reply.error)
            .unwrap_or_else(|| DEFAULT_SERVER_ERROR.to_string());
        return Err(GenerateError::Server(message));
    }
    serde_json::from_str(body).map_err(|e| {
        log::warn!("generation reply was not valid JSON: {}", e);
        GenerateError::MalformedResponse
    })
}
