//! Data collaborator.

use super::model::{ActivityPoint, Campaign, DashboardStats};
use crate::error::Result;

/// External source of campaigns and analytics.
#[async_trait::async_trait]
pub trait DataService: Send + Sync {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>>;

    async fn get_stats(&self) -> Result<DashboardStats>;

    /// Day-by-day series for the overview chart.
    async fn get_weekly_activity(&self) -> Result<Vec<ActivityPoint>>;
}
