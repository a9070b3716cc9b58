//! Dashboard view state.
//!
//! - `tab`: the dashboard sub-views (`ActiveTab`)
//! - `orchestrator`: tab selection plus the draft form, changed only through
//!   `ViewTransition` messages so compound edits land in one step

mod orchestrator;
mod tab;

pub use orchestrator::{ViewState, ViewTransition};
pub use tab::ActiveTab;
