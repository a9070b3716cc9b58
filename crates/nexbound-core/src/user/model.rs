//! UserProfile domain model.

use serde::{Deserialize, Serialize};

/// Profile of a signed-in visitor, as returned by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Display name
    pub name: String,
    pub email: String,
    /// Avatar image reference (URL)
    pub avatar: String,
}

impl UserProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }
}
