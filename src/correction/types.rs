//! Request/response bodies of the correction endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound body: `{ "texto": "..." }`.
#[derive(Debug, Clone)]
pub struct CorrectionRequest {
    pub texto: String,
}

impl CorrectionRequest {
    /// Parse a raw request body.
    ///
    /// Returns `None` when the body is not a JSON object with a string `texto`
    /// that still has content after trimming. Duplicate keys keep the last value.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body).ok()?;
        let texto = object.get("texto").and_then(Value::as_str)?;
        if texto.trim().is_empty() {
            return None;
        }
        Some(Self {
            texto: texto.to_string(),
        })
    }
}

/// Outbound body: either the correction or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectionResult {
    Success { resultado: String },
    Failure { error: String },
}
