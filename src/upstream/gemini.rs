//! Gemini `generateContent` client.
//!
//! Sends a single-turn prompt and classifies the JSON reply into an explicit
//! [`UpstreamReply`] before anything downstream looks at it.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::{ApiKey, Config};

/// Used when a failed reply carries no message of its own.
pub const GENERIC_FAILURE: &str = "Ocorreu um erro ao comunicar com a IA do Gemini.";

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

// reqwest errors render the request URL, which carries the key.
impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::Transport(err.without_url())
    }
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn single(text: &'a str) -> Self {
        Self {
            contents: [Content { parts: [Part { text }] }],
        }
    }
}

/// A classified upstream reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamReply {
    /// Candidates present. `text` is the trimmed first part, if it has any content.
    Success { text: Option<String> },
    /// Non-2xx status or no candidates. `message` is `error.message`, if any.
    Failure { message: Option<String> },
}

impl UpstreamReply {
    /// Decide success or failure from the status and parsed body.
    pub fn classify(status: StatusCode, body: &Value) -> Self {
        let has_candidates = body.get("candidates").is_some_and(|c| !c.is_null());

        if !status.is_success() || !has_candidates {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            return UpstreamReply::Failure { message };
        }

        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        UpstreamReply::Success { text }
    }
}

/// Client for one Gemini model endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    url: String,
}

impl GeminiClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.gemini.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.generate_content_url(),
        })
    }

    /// Send `prompt` and return the generated text.
    ///
    /// `Ok(None)` means the model replied successfully but produced no text.
    pub async fn generate(&self, key: &ApiKey, prompt: &str) -> Result<Option<String>, GeminiError> {
        let response = self
            .http
            .post(&self.url)
            .query(&[("key", key.expose())])
            .json(&GenerateContentRequest::single(prompt))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        debug!(status = %status, bytes = bytes.len(), "Gemini response received");

        match UpstreamReply::classify(status, &body) {
            UpstreamReply::Success { text } => Ok(text),
            UpstreamReply::Failure { message } => {
                error!(status = %status, payload = %body, "Gemini API error");
                Err(GeminiError::Api {
                    status,
                    message: message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::single("olá")).unwrap();
        assert_eq!(body, json!({ "contents": [{ "parts": [{ "text": "olá" }] }] }));
    }

    #[test]
    fn test_classify_success_trims() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "  A resposta correta é 4.\n" }] } }] });
        assert_eq!(
            UpstreamReply::classify(StatusCode::OK, &body),
            UpstreamReply::Success { text: Some("A resposta correta é 4.".into()) }
        );
    }

    #[test]
    fn test_classify_success_without_text() {
        for body in [
            json!({ "candidates": [] }),
            json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "   " }] } }] }),
        ] {
            assert_eq!(
                UpstreamReply::classify(StatusCode::OK, &body),
                UpstreamReply::Success { text: None }
            );
        }
    }

    #[test]
    fn test_classify_failures() {
        let err = json!({ "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" } });
        assert_eq!(
            UpstreamReply::classify(StatusCode::BAD_REQUEST, &err),
            UpstreamReply::Failure { message: Some("API key not valid.".into()) }
        );

        // 2xx without candidates is still a failure.
        assert_eq!(
            UpstreamReply::classify(StatusCode::OK, &json!({ "promptFeedback": {} })),
            UpstreamReply::Failure { message: None }
        );

        // Failure status wins even when candidates are present.
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "x" }] } }] });
        assert_eq!(
            UpstreamReply::classify(StatusCode::INTERNAL_SERVER_ERROR, &body),
            UpstreamReply::Failure { message: None }
        );
    }
}
