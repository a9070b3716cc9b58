//! Application state published to observers.
//!
//! `AppState` is the snapshot type: the store clones it into the watch
//! channel after every change, and front ends render only from those clones.

use nexbound_core::campaign::{ActivityPoint, Campaign, DashboardStats};
use nexbound_core::request::{RequestSequencer, RequestSlot, RequestTicket};
use nexbound_core::route::{NavigationState, Route, RouteDecision};
use nexbound_core::session::SessionState;
use nexbound_core::view::ViewState;
use serde::Serialize;

/// Inline message shown on the login view after a rejected sign-in.
pub const LOGIN_ERROR_MESSAGE: &str = "Invalid credentials. Try using default values.";

/// Remote data shown by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DashboardData {
    #[default]
    Loading,
    Ready {
        stats: DashboardStats,
        campaigns: Vec<Campaign>,
        activity: Vec<ActivityPoint>,
    },
    Failed {
        message: String,
    },
}

impl DashboardData {
    pub fn campaigns(&self) -> &[Campaign] {
        match self {
            Self::Ready { campaigns, .. } => campaigns,
            _ => &[],
        }
    }

    pub fn find_campaign(&self, id: &str) -> Option<&Campaign> {
        self.campaigns().iter().find(|c| c.id == id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// State owned by a mounted dashboard. Dropped when the visitor leaves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub(crate) data: DashboardData,
    pub(crate) view: ViewState,
}

impl DashboardState {
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub(crate) session: SessionState,
    pub(crate) navigation: NavigationState,
    pub(crate) dashboard: Option<DashboardState>,
    pub(crate) login_error: Option<String>,
    /// Email of the most recent sign-in attempt.
    pub(crate) login_email: Option<String>,
}

impl AppState {
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_route(&self) -> Route {
        self.navigation.current()
    }

    /// Present exactly while the dashboard is on screen.
    pub fn dashboard(&self) -> Option<&DashboardState> {
        self.dashboard.as_ref()
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn login_email(&self) -> Option<&str> {
        self.login_email.as_deref()
    }
}

/// State plus the request sequencer, guarded together by the store lock.
#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub(crate) state: AppState,
    pub(crate) requests: RequestSequencer,
}

impl StoreInner {
    /// Runs the guard for `route` and mounts or unmounts the dashboard to
    /// match the result.
    ///
    /// Returns a ticket when a freshly mounted dashboard needs its data.
    pub(crate) fn navigate(&mut self, route: Route) -> (RouteDecision, Option<RequestTicket>) {
        let previous = self.state.navigation.current();
        let decision = self.state.navigation.navigate(route, &self.state.session);
        if decision.target() != previous {
            self.state.login_error = None;
        }
        let load = self.sync_dashboard();
        (decision, load)
    }

    /// Re-runs the guard after a session change.
    pub(crate) fn reevaluate(&mut self) -> Option<RouteDecision> {
        let decision = self.state.navigation.reevaluate(&self.state.session);
        if decision.is_some() {
            self.state.login_error = None;
        }
        // A redirect only ever leaves the dashboard, so no load is needed.
        let _ = self.sync_dashboard();
        decision
    }

    fn sync_dashboard(&mut self) -> Option<RequestTicket> {
        let on_dashboard = self.state.navigation.current() == Route::Dashboard;
        match (on_dashboard, self.state.dashboard.is_some()) {
            (true, false) => {
                self.state.dashboard = Some(DashboardState::default());
                Some(self.requests.issue(RequestSlot::DashboardData))
            }
            (false, true) => {
                self.state.dashboard = None;
                self.requests.invalidate(RequestSlot::DashboardData);
                self.requests.invalidate(RequestSlot::Draft);
                None
            }
            _ => None,
        }
    }
}
