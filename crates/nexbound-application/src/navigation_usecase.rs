use std::sync::Arc;

use nexbound_core::error::Result;
use nexbound_core::route::{Route, RouteDecision};

use crate::dashboard_usecase::DashboardUseCase;
use crate::store::AppStore;

/// Moves the visitor between views, always through the route guard.
pub struct NavigationUseCase {
    store: Arc<AppStore>,
    dashboard: Arc<DashboardUseCase>,
}

impl NavigationUseCase {
    pub fn new(store: Arc<AppStore>, dashboard: Arc<DashboardUseCase>) -> Self {
        Self { store, dashboard }
    }

    /// Navigates to `route`. Entering the dashboard loads its data before
    /// this returns.
    pub async fn navigate(&self, route: Route) -> RouteDecision {
        let (decision, load) = self.store.update(|inner| inner.navigate(route)).await;

        match decision {
            RouteDecision::Render { route } => tracing::debug!("[Router] Showing {}", route),
            RouteDecision::Redirect { to, from } => {
                tracing::info!("[Router] {} requires sign-in; showing {}", from, to)
            }
        }

        if let Some(ticket) = load {
            self.dashboard.fetch_data(ticket).await;
        }
        decision
    }

    /// Parses `path` and navigates to it.
    ///
    /// # Errors
    ///
    /// `NotFound` for paths outside the three known views.
    pub async fn navigate_path(&self, path: &str) -> Result<RouteDecision> {
        let route: Route = path.parse()?;
        Ok(self.navigate(route).await)
    }
}
