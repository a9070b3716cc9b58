//! Configuration models.
//!
//! `NexboundConfig` is loaded from `config.toml`; every field has a default so a
//! missing or partial file is valid. Secrets live apart in `SecretConfig`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NexboundConfig {
    pub drafting: DraftingSettings,
    pub mock_backend: MockBackendSettings,
}

/// Settings for the AI email writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingSettings {
    pub model: String,
    pub base_url: String,
    /// Transport timeout for a single generation request. `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for DraftingSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout_secs: 0,
        }
    }
}

impl DraftingSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Simulated latency of the mock backend, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockBackendSettings {
    pub login_delay_ms: u64,
    pub logout_delay_ms: u64,
    pub data_delay_ms: u64,
}

impl Default for MockBackendSettings {
    fn default() -> Self {
        Self {
            login_delay_ms: 800,
            logout_delay_ms: 300,
            data_delay_ms: 600,
        }
    }
}

impl MockBackendSettings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn logout_delay(&self) -> Duration {
        Duration::from_millis(self.logout_delay_ms)
    }

    pub fn data_delay(&self) -> Duration {
        Duration::from_millis(self.data_delay_ms)
    }

    /// Zero latency, for tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            logout_delay_ms: 0,
            data_delay_ms: 0,
        }
    }
}

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// Returns the API key if one is configured and non-blank.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .map(|g| g.api_key.trim())
            .filter(|key| !key.is_empty())
    }
}
