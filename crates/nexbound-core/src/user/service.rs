//! Authentication collaborator.

use super::model::UserProfile;
use crate::error::Result;

/// External authentication service.
///
/// Implementations may take arbitrarily long; callers apply the outcome to
/// session state only once the future resolves.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Signs in with the given email.
    ///
    /// # Errors
    ///
    /// Returns `NexboundError::Authentication` when the credentials are rejected.
    async fn login(&self, email: &str) -> Result<UserProfile>;

    /// Ends the remote session.
    async fn logout(&self) -> Result<()>;
}
