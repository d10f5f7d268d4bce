//! Runtime configuration for exam-corrector.
//!
//! Configuration is loaded from a JSON file or constructed programmatically.
//! The Gemini credential itself never lives in the file: it is read from the
//! environment variable named by [`GeminiConfig::api_key_env`].

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "exam-corrector", about = "Gemini-backed exam answer correction proxy")]
pub struct Cli {
    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// HTTP listen address (overrides the config file).
    #[arg(long)]
    pub listen: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,

    /// Upstream Gemini configuration.
    pub gemini: GeminiConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (e.g. "0.0.0.0:3000").
    pub listen: String,

    /// Path the correction endpoint is mounted on.
    pub route: String,

    /// Allow cross-origin requests from any origin.
    pub cors_allow_any_origin: bool,

    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
            route: "/api/corrigir-gemini".to_string(),
            cors_allow_any_origin: true,
            max_body_bytes: 2 * 1024 * 1024, // 2 MiB
        }
    }
}

/// Gemini API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Scheme and host of the Generative Language API.
    pub base_url: String,

    /// Model used for content generation.
    pub model: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// Timeout for the outbound call in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash-latest".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Gemini API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Empty or whitespace-only keys are rejected.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for missing fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key_from_env(&self) -> Option<ApiKey> {
        std::env::var(&self.gemini.api_key_env)
            .ok()
            .and_then(ApiKey::new)
    }

    /// Full `generateContent` URL, without the `key` query parameter.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.gemini.base_url.trim_end_matches('/'),
            self.gemini.model
        )
    }
}
