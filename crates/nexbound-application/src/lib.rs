//! Application layer for Nexbound.
//!
//! Owns the single application store and the use cases that mutate it.
//! Front ends observe state only through [`AppStore::subscribe`] snapshots.

pub mod app;
pub mod dashboard_usecase;
pub mod navigation_usecase;
pub mod session_usecase;
pub mod state;
pub mod store;

pub use app::NexboundApp;
pub use dashboard_usecase::DashboardUseCase;
pub use navigation_usecase::NavigationUseCase;
pub use session_usecase::SessionUseCase;
pub use state::{AppState, DashboardData, DashboardState, LOGIN_ERROR_MESSAGE};
pub use store::{AppStore, Completion};
