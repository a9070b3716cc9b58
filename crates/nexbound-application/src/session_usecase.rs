//! Session use case.
//!
//! Drives the authentication collaborator and keeps the session, the route
//! guard and the post-login navigation in step.

use std::sync::Arc;

use nexbound_core::error::{NexboundError, Result};
use nexbound_core::request::RequestSlot;
use nexbound_core::route::{Route, RouteDecision};
use nexbound_core::user::{AuthService, UserProfile};

use crate::navigation_usecase::NavigationUseCase;
use crate::state::LOGIN_ERROR_MESSAGE;
use crate::store::{AppStore, Completion};

pub struct SessionUseCase {
    store: Arc<AppStore>,
    auth_service: Arc<dyn AuthService>,
    navigation: Arc<NavigationUseCase>,
}

impl SessionUseCase {
    pub fn new(
        store: Arc<AppStore>,
        auth_service: Arc<dyn AuthService>,
        navigation: Arc<NavigationUseCase>,
    ) -> Self {
        Self {
            store,
            auth_service,
            navigation,
        }
    }

    /// Signs in and, on success, navigates to the dashboard.
    ///
    /// The destination saved by an earlier redirect stays available in the
    /// navigation state but is not resumed.
    ///
    /// # Errors
    ///
    /// - `Busy` while another sign-in is in progress
    /// - `Authentication` when the collaborator rejects the credentials; the
    ///   login view then carries [`LOGIN_ERROR_MESSAGE`]
    pub async fn login(&self, email: &str) -> Result<Completion<UserProfile>> {
        let ticket = self
            .store
            .update(|inner| {
                if inner.state.session.is_loading() {
                    return Err(NexboundError::Busy("sign-in"));
                }
                inner.state.session.begin_login();
                inner.state.login_error = None;
                inner.state.login_email = Some(email.to_string());
                Ok(inner.requests.issue(RequestSlot::Login))
            })
            .await?;

        tracing::debug!("[Auth] Signing in (request #{})", ticket.seq());
        let result = self.auth_service.login(email).await;

        let applied = self
            .store
            .update(|inner| {
                if !inner.requests.is_current(ticket) {
                    return false;
                }
                match &result {
                    Ok(user) => inner.state.session.complete_login(user.clone()),
                    Err(_) => {
                        inner.state.session.fail_login();
                        inner.state.login_error = Some(LOGIN_ERROR_MESSAGE.to_string());
                    }
                }
                inner.reevaluate();
                true
            })
            .await;

        if !applied {
            tracing::debug!("[Auth] Discarding superseded sign-in (request #{})", ticket.seq());
            return Ok(Completion::Stale);
        }

        match result {
            Ok(user) => {
                tracing::info!("[Auth] Signed in as {}", user.name);
                self.navigation.navigate(Route::Dashboard).await;
                Ok(Completion::Applied(user))
            }
            Err(err) => {
                tracing::warn!("[Auth] Sign-in rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Signs out and returns to the landing view.
    ///
    /// The session is cleared and the guard re-run before anything else, so
    /// a mounted dashboard is left immediately. A sign-in still in flight is
    /// abandoned.
    pub async fn logout(&self) -> RouteDecision {
        let redirect = self
            .store
            .update(|inner| {
                if inner.state.session.is_loading() {
                    inner.requests.invalidate(RequestSlot::Login);
                    inner.state.session.fail_login();
                }
                inner.state.session.logout();
                inner.reevaluate()
            })
            .await;

        if let Some(decision) = redirect {
            tracing::debug!("[Auth] Guard moved visitor to {}", decision.target());
        }
        let decision = self.navigation.navigate(Route::Landing).await;

        if let Err(err) = self.auth_service.logout().await {
            tracing::warn!("[Auth] Logout notification failed: {}", err);
        }
        tracing::info!("[Auth] Signed out");
        decision
    }
}
