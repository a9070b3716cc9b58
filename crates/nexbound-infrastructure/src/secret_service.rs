//! Secret service implementation.
//!
//! The drafting credential comes from the `API_KEY` environment variable or,
//! failing that, from `secret.json` in the config directory.

use std::path::{Path, PathBuf};

use nexbound_core::config::{GeminiConfig, SecretConfig};
use nexbound_core::secret::SecretService;

use crate::paths::NexboundPaths;

pub const API_KEY_ENV: &str = "API_KEY";

/// Loads secrets from the environment and `secret.json`.
#[derive(Debug, Clone)]
pub struct SecretServiceImpl {
    env_var: String,
    secret_file: Option<PathBuf>,
}

impl SecretServiceImpl {
    /// Reads `API_KEY` and the default `secret.json`.
    pub fn new(base_path: Option<&Path>) -> Self {
        let secret_file = NexboundPaths::new(base_path).secret_file().ok();
        Self {
            env_var: API_KEY_ENV.to_string(),
            secret_file,
        }
    }

    /// Overrides the environment variable consulted first.
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    fn from_env(&self) -> Option<SecretConfig> {
        let key = std::env::var(&self.env_var).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        tracing::debug!("[Secrets] Using API key from ${}", self.env_var);
        Some(SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: key,
                model_name: None,
            }),
        })
    }

    async fn from_file(&self) -> Result<SecretConfig, String> {
        let Some(path) = &self.secret_file else {
            return Ok(SecretConfig::default());
        };
        if !path.exists() {
            return Ok(SecretConfig::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e.kind()))?;
        // The parser error can quote file content, so only its position is kept.
        serde_json::from_str(&content).map_err(|e| {
            format!(
                "Failed to parse {} at line {} column {}",
                path.display(),
                e.line(),
                e.column()
            )
        })
    }
}

impl Default for SecretServiceImpl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        if let Some(config) = self.from_env() {
            return Ok(config);
        }
        self.from_file().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const UNSET_VAR: &str = "NEXBOUND_TEST_SECRET_THAT_IS_NEVER_SET";

    #[tokio::test]
    async fn test_no_sources_yields_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = SecretServiceImpl::new(Some(temp_dir.path())).with_env_var(UNSET_VAR);

        let secrets = service.load_secrets().await.unwrap();
        assert!(secrets.gemini_api_key().is_none());
    }

    #[tokio::test]
    async fn test_reads_secret_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("secret.json"),
            r#"{ "gemini": { "api_key": "file-key" } }"#,
        )
        .unwrap();
        let service = SecretServiceImpl::new(Some(temp_dir.path())).with_env_var(UNSET_VAR);

        let secrets = service.load_secrets().await.unwrap();
        assert_eq!(secrets.gemini_api_key(), Some("file-key"));
    }

    #[tokio::test]
    async fn test_parse_error_does_not_leak_content() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("secret.json"), "{ \"gemini\": sk-live-123 }").unwrap();
        let service = SecretServiceImpl::new(Some(temp_dir.path())).with_env_var(UNSET_VAR);

        let err = service.load_secrets().await.unwrap_err();
        assert!(err.contains("line 1"));
        assert!(!err.contains("sk-live-123"));
    }
}
