//! Configuration service implementation.
//!
//! Loads `NexboundConfig` from `config.toml` (by default
//! `~/.config/nexbound/config.toml`). A missing file means defaults.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use nexbound_core::config::NexboundConfig;
use nexbound_core::error::Result;

use crate::paths::NexboundPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<NexboundConfig>>>,
}

impl ConfigService {
    /// Uses the default location from [`NexboundPaths`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(NexboundPaths::default().config_file()?))
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn get_config(&self) -> Result<NexboundConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = None;
    }

    fn load_config(&self) -> Result<NexboundConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[Config] No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(NexboundConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: NexboundConfig = toml::from_str(&content)?;
        tracing::info!("[Config] Loaded configuration from {}", self.path.display());
        Ok(config)
    }
}
