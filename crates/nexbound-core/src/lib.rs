//! Domain layer for Nexbound.
//!
//! Owns the session gate, route guard and dashboard view state, plus the
//! collaborator traits (authentication, data, drafting) that outer crates
//! implement.

pub mod campaign;
pub mod config;
pub mod draft;
pub mod error;
pub mod request;
pub mod route;
pub mod secret;
pub mod session;
pub mod user;
pub mod view;

// Re-export common error type
pub use error::NexboundError;
