use serde::Serialize;

use crate::user::UserProfile;

/// Authentication state of the current visitor.
///
/// `is_authenticated` is derived from the presence of a user, so the two can
/// never disagree. Created empty; not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    user: Option<UserProfile>,
    is_loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True strictly between a login attempt starting and resolving.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn begin_login(&mut self) {
        self.is_loading = true;
    }

    pub fn complete_login(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.is_loading = false;
    }

    pub fn fail_login(&mut self) {
        self.user = None;
        self.is_loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
