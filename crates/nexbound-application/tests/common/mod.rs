#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use nexbound_application::{AppState, NexboundApp};
use nexbound_core::campaign::{ActivityPoint, Campaign, DashboardStats, DataService};
use nexbound_core::draft::{DraftFormFields, DraftingService};
use nexbound_core::error::{NexboundError, Result};
use nexbound_infrastructure::mock_backend::fixtures;
use nexbound_infrastructure::{MockAuthService, MockDataService};

pub const DEMO_EMAIL: &str = "demo@nexbound.io";

/// Recipient name that makes [`RecordingDrafter`] take much longer.
pub const SLOW_RECIPIENT: &str = "Slow";

/// Counts calls and echoes the recipient back after a delay.
#[derive(Default)]
pub struct RecordingDrafter {
    calls: AtomicUsize,
}

impl RecordingDrafter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DraftingService for RecordingDrafter {
    async fn generate_draft(&self, request: &DraftFormFields) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = if request.recipient_name == SLOW_RECIPIENT {
            Duration::from_secs(5)
        } else {
            Duration::from_secs(1)
        };
        tokio::time::sleep(delay).await;
        format!("Subject: Hello {}", request.recipient_name)
    }
}

/// Fails every call until [`FlakyDataService::recover`] is called.
#[derive(Default)]
pub struct FlakyDataService {
    recovered: AtomicBool,
}

impl FlakyDataService {
    pub fn recover(&self) {
        self.recovered.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.recovered.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(NexboundError::data_access("backend unavailable"))
        }
    }
}

#[async_trait]
impl DataService for FlakyDataService {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        self.check().map(|_| fixtures::mock_campaigns())
    }

    async fn get_stats(&self) -> Result<DashboardStats> {
        self.check().map(|_| fixtures::mock_stats())
    }

    async fn get_weekly_activity(&self) -> Result<Vec<ActivityPoint>> {
        self.check().map(|_| fixtures::weekly_activity())
    }
}

/// Each operation's first call is slow and fails; later calls are quick
/// and return the fixtures.
#[derive(Default)]
pub struct SupersededDataService {
    stats_calls: AtomicUsize,
    campaign_calls: AtomicUsize,
    activity_calls: AtomicUsize,
}

impl SupersededDataService {
    async fn respond<T>(calls: &AtomicUsize, value: impl FnOnce() -> T) -> Result<T> {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Err(NexboundError::data_access("first fetch failed"))
        } else {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(value())
        }
    }
}

#[async_trait]
impl DataService for SupersededDataService {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        Self::respond(&self.campaign_calls, fixtures::mock_campaigns).await
    }

    async fn get_stats(&self) -> Result<DashboardStats> {
        Self::respond(&self.stats_calls, fixtures::mock_stats).await
    }

    async fn get_weekly_activity(&self) -> Result<Vec<ActivityPoint>> {
        Self::respond(&self.activity_calls, fixtures::weekly_activity).await
    }
}

pub fn app_with(
    data: Arc<dyn DataService>,
    drafter: Arc<dyn DraftingService>,
) -> NexboundApp {
    NexboundApp::new(Arc::new(MockAuthService::default()), data, drafter)
}

pub fn mock_app(drafter: Arc<RecordingDrafter>) -> NexboundApp {
    app_with(Arc::new(MockDataService::default()), drafter)
}

/// Signs in with the demo account, which lands on a loaded dashboard.
pub async fn signed_in(app: &NexboundApp) {
    app.session
        .login(DEMO_EMAIL)
        .await
        .expect("demo login succeeds");
}

/// Waits until a published snapshot satisfies `predicate`.
pub async fn wait_for(app: &NexboundApp, predicate: impl FnMut(&AppState) -> bool) {
    let mut rx = app.store.subscribe();
    rx.wait_for(predicate).await.expect("store outlives the test");
}
