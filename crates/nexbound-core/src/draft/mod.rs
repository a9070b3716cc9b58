//! Email draft domain module.
//!
//! # Module Structure
//!
//! - `model`: Draft request fields (`DraftFormFields`, `Tone`, `DraftField`)
//! - `form`: In-progress draft form state (`DraftForm`)
//! - `service`: Drafting collaborator trait

mod form;
mod model;
mod service;

pub use form::DraftForm;
pub use model::{DraftField, DraftFormFields, Tone};
pub use service::DraftingService;
