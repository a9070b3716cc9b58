//! Drafting collaborator.

use super::model::DraftFormFields;

/// Turns a draft request into email text.
///
/// The contract is infallible on purpose: failures come back as a
/// human-readable message in the returned string, and callers store it as-is.
#[async_trait::async_trait]
pub trait DraftingService: Send + Sync {
    async fn generate_draft(&self, request: &DraftFormFields) -> String;
}
