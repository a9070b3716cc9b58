use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use nexbound_application::NexboundApp;
use nexbound_infrastructure::{ConfigService, MockAuthService, MockDataService, SecretServiceImpl};
use nexbound_interaction::GeminiDraftingAgent;

/// Services wired from configuration.
pub struct AppBootstrap {
    pub app: NexboundApp,
    pub drafter: Arc<GeminiDraftingAgent>,
}

impl AppBootstrap {
    /// Loads configuration and secrets and builds the application.
    ///
    /// With `config_path`, `secret.json` is read from the same directory;
    /// otherwise both come from the platform config directory.
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new().context("Failed to resolve config directory")?,
        };
        let config = config_service
            .get_config()
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
        tracing::info!(
            "[Bootstrap] Configuration loaded from {}",
            config_service.path().display()
        );

        let secret_service = SecretServiceImpl::new(config_path.and_then(Path::parent));
        let drafter = Arc::new(
            GeminiDraftingAgent::from_secrets(&secret_service, &config.drafting).await,
        );
        tracing::info!(
            "[Bootstrap] AI writer using model {} (API key configured: {})",
            drafter.model(),
            drafter.has_api_key()
        );

        let app = NexboundApp::new(
            Arc::new(MockAuthService::new(&config.mock_backend)),
            Arc::new(MockDataService::new(&config.mock_backend)),
            drafter.clone(),
        );

        Ok(Self { app, drafter })
    }
}
