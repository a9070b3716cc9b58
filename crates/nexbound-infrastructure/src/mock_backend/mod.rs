//! In-memory stand-ins for the authentication and data collaborators.
//!
//! Every call sleeps for a configurable delay to mimic network latency.

mod auth;
mod data;
pub mod fixtures;

pub use auth::MockAuthService;
pub use data::MockDataService;
