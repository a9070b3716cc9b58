use std::time::Duration;

use nexbound_core::campaign::{ActivityPoint, Campaign, DashboardStats, DataService};
use nexbound_core::config::MockBackendSettings;
use nexbound_core::error::{NexboundError, Result};

use super::fixtures;

/// Serves the fixture campaigns and statistics.
#[derive(Debug, Clone)]
pub struct MockDataService {
    delay: Duration,
    /// When set, every call fails with this message.
    failure: Option<String>,
}

impl MockDataService {
    pub fn new(settings: &MockBackendSettings) -> Self {
        Self {
            delay: settings.data_delay(),
            failure: None,
        }
    }

    /// Makes every call fail after the usual delay.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    async fn respond<T>(&self, value: impl FnOnce() -> T) -> Result<T> {
        tokio::time::sleep(self.delay).await;
        match &self.failure {
            Some(message) => Err(NexboundError::data_access(message.clone())),
            None => Ok(value()),
        }
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new(&MockBackendSettings::default())
    }
}

#[async_trait::async_trait]
impl DataService for MockDataService {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        self.respond(fixtures::mock_campaigns).await
    }

    async fn get_stats(&self) -> Result<DashboardStats> {
        self.respond(fixtures::mock_stats).await
    }

    async fn get_weekly_activity(&self) -> Result<Vec<ActivityPoint>> {
        self.respond(fixtures::weekly_activity).await
    }
}
