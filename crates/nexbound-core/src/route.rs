//! Routing surface and the authentication guard.
//!
//! Three views exist: `/` (landing), `/login` and `/dashboard`. Only the
//! dashboard is protected. The guard is evaluated on every navigation and
//! again whenever the session changes; decisions are never cached.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::NexboundError;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Route {
    #[default]
    Landing,
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}

impl FromStr for Route {
    type Err = NexboundError;

    /// Accepts paths with or without the leading slash or a `#` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        let path = trimmed.trim_end_matches('/');
        match path {
            "" => Ok(Self::Landing),
            "/login" | "login" => Ok(Self::Login),
            "/dashboard" | "dashboard" => Ok(Self::Dashboard),
            _ => Err(NexboundError::not_found("route", s.trim())),
        }
    }
}

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RouteDecision {
    /// Show the requested view as-is.
    Render { route: Route },
    /// Show `to` instead; `from` is the originally requested location.
    Redirect { to: Route, from: Route },
}

impl RouteDecision {
    /// The view that ends up on screen.
    pub fn target(&self) -> Route {
        match self {
            Self::Render { route } => *route,
            Self::Redirect { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Decides whether a requested view may be shown.
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(requested: Route, session: &SessionState) -> RouteDecision {
        if requested.is_protected() && !session.is_authenticated() {
            RouteDecision::Redirect {
                to: Route::Login,
                from: requested,
            }
        } else {
            RouteDecision::Render { route: requested }
        }
    }
}

/// The view currently on screen and, after a redirect, where the visitor
/// originally wanted to go. The destination is kept for the login view to
/// use; nothing resumes it automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    current: Route,
    intended_destination: Option<Route>,
}

impl NavigationState {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn intended_destination(&self) -> Option<Route> {
        self.intended_destination
    }

    /// Runs the guard for `requested` and moves to whatever it allows.
    pub fn navigate(&mut self, requested: Route, session: &SessionState) -> RouteDecision {
        let decision = RouteGuard::check(requested, session);
        match decision {
            RouteDecision::Render { route } => {
                self.current = route;
                if route != Route::Login {
                    self.intended_destination = None;
                }
            }
            RouteDecision::Redirect { to, from } => {
                self.current = to;
                self.intended_destination = Some(from);
            }
        }
        decision
    }

    /// Re-runs the guard for the view on screen after a session change.
    ///
    /// Returns the decision only if it moved the visitor away.
    pub fn reevaluate(&mut self, session: &SessionState) -> Option<RouteDecision> {
        let decision = self.navigate(self.current, session);
        decision.is_redirect().then_some(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserProfile;

    fn signed_in() -> SessionState {
        let mut session = SessionState::new();
        session.complete_login(UserProfile::new("u", "U", "u@x.io", "a"));
        session
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Landing);
        assert_eq!("#/dashboard".parse::<Route>().unwrap(), Route::Dashboard);
        assert_eq!("login".parse::<Route>().unwrap(), Route::Login);
        assert_eq!("/login/".parse::<Route>().unwrap(), Route::Login);
        assert!("/admin".parse::<Route>().unwrap_err().is_not_found());
    }

    #[test]
    fn test_protected_route_redirects_when_signed_out() {
        let decision = RouteGuard::check(Route::Dashboard, &SessionState::new());
        assert_eq!(
            decision,
            RouteDecision::Redirect {
                to: Route::Login,
                from: Route::Dashboard
            }
        );
    }

    #[test]
    fn test_protected_route_renders_when_signed_in() {
        let decision = RouteGuard::check(Route::Dashboard, &signed_in());
        assert_eq!(decision, RouteDecision::Render { route: Route::Dashboard });
    }

    #[test]
    fn test_public_routes_always_render() {
        for session in [SessionState::new(), signed_in()] {
            for route in [Route::Landing, Route::Login] {
                assert!(!RouteGuard::check(route, &session).is_redirect());
            }
        }
    }

    #[test]
    fn test_redirect_records_destination_without_resuming() {
        let mut nav = NavigationState::default();
        nav.navigate(Route::Dashboard, &SessionState::new());

        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.intended_destination(), Some(Route::Dashboard));

        // Signing in alone does not move the visitor.
        let session = signed_in();
        assert!(nav.reevaluate(&session).is_none());
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.intended_destination(), Some(Route::Dashboard));

        nav.navigate(Route::Dashboard, &session);
        assert_eq!(nav.current(), Route::Dashboard);
        assert_eq!(nav.intended_destination(), None);
    }

    #[test]
    fn test_reevaluate_after_logout_redirects_away() {
        let mut session = signed_in();
        let mut nav = NavigationState::default();
        nav.navigate(Route::Dashboard, &session);

        session.logout();
        let decision = nav.reevaluate(&session).expect("should redirect");

        assert_eq!(decision.target(), Route::Login);
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.intended_destination(), Some(Route::Dashboard));
    }
}
