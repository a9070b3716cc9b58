//! Unified path management for nexbound configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/nexbound/          # Config directory (platform config dir)
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//! ```

use std::path::{Path, PathBuf};

use nexbound_core::error::{NexboundError, Result};

const APP_DIR: &str = "nexbound";

/// Resolves configuration file locations.
///
/// With a base path every file lives directly under it, which tests use to
/// point at a temporary directory.
#[derive(Debug, Clone, Default)]
pub struct NexboundPaths {
    base: Option<PathBuf>,
}

impl NexboundPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory (e.g., `~/.config/nexbound/`).
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| NexboundError::config("Cannot find configuration directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("secret.json"))
    }
}
