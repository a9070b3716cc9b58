//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model
//! - `service`: Authentication collaborator trait
//!
//! # Usage
//!
//! ```ignore
//! use nexbound_core::user::{UserProfile, AuthService};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::UserProfile;
pub use service::AuthService;
