//! Session domain module.
//!
//! Holds the visitor's authentication status and profile.
//!
//! # Usage
//!
//! ```ignore
//! use nexbound_core::session::SessionState;
//! ```

mod state;

pub use state::SessionState;
