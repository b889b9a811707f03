//! Wire types exchanged with the generation endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`, tagged by mode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationRequest {
    Prompt { prompt: String, provider: String },
    Url { url: String },
}

/// Response body of a successful generation.
///
/// Every field is optional from this client's perspective; `zip_base64` in
/// particular lags behind the code fragments until the service has finished
/// packaging the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationResult {
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
    pub zip_base64: Option<String>,
    pub filename: Option<String>,
}

impl GenerationResult {
    /// True when a downloadable ZIP payload is present and non-empty.
    pub fn has_archive(&self) -> bool {
        self.zip_base64.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Error body the endpoint sends alongside a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorReply {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_request_carries_mode_prompt_and_provider() {
        let req = GenerationRequest::Prompt {
            prompt: "a landing page".to_string(),
            provider: "gemini".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["mode"], "prompt");
        assert_eq!(json["prompt"], "a landing page");
        assert_eq!(json["provider"], "gemini");
    }

    #[test]
    fn url_request_carries_mode_url_and_no_provider() {
        let req = GenerationRequest::Url {
            url: "https://example.com".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["mode"], "url");
        assert_eq!(json["url"], "https://example.com");
        assert!(json.get("provider").is_none());
    }

    #[test]
    fn result_tolerates_missing_fields() {
        let result: GenerationResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, GenerationResult::default());
        assert!(!result.has_archive());
    }

    #[test]
    fn result_maps_camel_case_zip_field() {
        let result: GenerationResult =
            serde_json::from_str(r#"{"zipBase64":"AAAA","filename":"site.zip"}"#).unwrap();
        assert_eq!(result.zip_base64.as_deref(), Some("AAAA"));
        assert_eq!(result.filename.as_deref(), Some("site.zip"));
        assert!(result.has_archive());
    }

    #[test]
    fn empty_zip_string_counts_as_absent() {
        let result: GenerationResult = serde_json::from_str(r#"{"zipBase64":""}"#).unwrap();
        assert!(!result.has_archive());
    }
}
