//! In-progress draft form state.

use serde::Serialize;

use super::model::{DraftField, DraftFormFields, Tone};
use crate::campaign::Campaign;
use crate::error::{NexboundError, Result};

/// State of the AI writer form.
///
/// Fields are private; every mutation goes through the operations below.
/// Submission is split in two steps so the caller can release its lock while
/// the drafting collaborator runs: [`DraftForm::begin_submit`] validates and
/// raises the generating flag, [`DraftForm::finish_submit`] stores the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftForm {
    fields: DraftFormFields,
    generated_draft: String,
    is_generating: bool,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &DraftFormFields {
        &self.fields
    }

    /// Most recent generation result; empty means none yet.
    pub fn generated_draft(&self) -> &str {
        &self.generated_draft
    }

    pub fn has_draft(&self) -> bool {
        !self.generated_draft.is_empty()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Whether the submit action is currently available.
    pub fn can_submit(&self) -> bool {
        !self.is_generating && self.fields.missing_fields().is_empty()
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        self.fields.set(field, value)
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.fields.tone = tone;
    }

    /// Loads a campaign's saved configuration and saved draft.
    ///
    /// The two copies are independent: a missing configuration resets the
    /// fields to defaults, a missing draft clears the generated text.
    pub fn populate_from_campaign(&mut self, campaign: &Campaign) {
        self.fields = campaign.draft_config.clone().unwrap_or_default();
        self.generated_draft = campaign.saved_draft.clone().unwrap_or_default();
        self.is_generating = false;
    }

    /// Clears all fields to defaults and drops the generated draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the form and marks it as generating.
    ///
    /// Returns the request to send to the drafting collaborator.
    ///
    /// # Errors
    ///
    /// - `Busy` while a previous submission is unresolved
    /// - `Validation` when a required text field is empty
    pub fn begin_submit(&mut self) -> Result<DraftFormFields> {
        if self.is_generating {
            return Err(NexboundError::Busy("draft generation"));
        }
        self.fields.validate()?;
        self.is_generating = true;
        Ok(self.fields.clone())
    }

    /// Stores the collaborator's output, whatever it is, and clears the flag.
    pub fn finish_submit(&mut self, draft: impl Into<String>) {
        self.generated_draft = draft.into();
        self.is_generating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignStatus;

    fn campaign(config: Option<DraftFormFields>, draft: Option<&str>) -> Campaign {
        Campaign {
            id: "c_t".into(),
            name: "Test".into(),
            status: CampaignStatus::Active,
            sent: 10,
            opened: 5,
            replied: 1,
            draft_config: config,
            saved_draft: draft.map(str::to_string),
        }
    }

    fn filled_form() -> DraftForm {
        let mut form = DraftForm::new();
        form.update_field(DraftField::RecipientName, "Ann").unwrap();
        form.update_field(DraftField::CompanyName, "Acme").unwrap();
        form.update_field(DraftField::ValueProposition, "Faster sales").unwrap();
        form
    }

    #[test]
    fn test_populate_copies_config_and_draft() {
        let config = DraftFormFields::new("n", "c", "v", Tone::Persuasive);
        let mut form = filled_form();
        form.populate_from_campaign(&campaign(Some(config.clone()), Some("saved")));

        assert_eq!(form.fields(), &config);
        assert_eq!(form.generated_draft(), "saved");
    }

    #[test]
    fn test_populate_without_config_resets_fields() {
        let mut form = filled_form();
        form.finish_submit("old draft");
        form.populate_from_campaign(&campaign(None, Some("saved")));

        assert_eq!(form.fields(), &DraftFormFields::default());
        assert_eq!(form.generated_draft(), "saved");
    }

    #[test]
    fn test_populate_without_draft_clears_draft() {
        let config = DraftFormFields::new("n", "c", "v", Tone::Casual);
        let mut form = DraftForm::new();
        form.finish_submit("old draft");
        form.populate_from_campaign(&campaign(Some(config.clone()), None));

        assert_eq!(form.fields(), &config);
        assert!(!form.has_draft());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut form = filled_form();
        form.set_tone(Tone::Casual);
        form.begin_submit().unwrap();
        form.reset();

        assert_eq!(form, DraftForm::default());
        assert_eq!(form.generated_draft(), "");
        assert!(!form.is_generating());
    }

    #[test]
    fn test_begin_submit_rejects_empty_fields() {
        let mut form = DraftForm::new();
        let err = form.begin_submit().unwrap_err();

        assert!(err.is_validation());
        assert!(!form.is_generating());
    }

    #[test]
    fn test_begin_submit_blocks_reentry() {
        let mut form = filled_form();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.recipient_name, "Ann");
        assert!(form.is_generating());
        assert!(!form.can_submit());

        assert!(form.begin_submit().unwrap_err().is_busy());

        form.finish_submit("Subject: hi");
        assert_eq!(form.generated_draft(), "Subject: hi");
        assert!(form.can_submit());
    }

    #[test]
    fn test_finish_submit_overwrites_with_error_text() {
        let mut form = filled_form();
        form.finish_submit("first");
        form.begin_submit().unwrap();
        form.finish_submit("An error occurred while generating the email. Please try again.");

        assert_eq!(
            form.generated_draft(),
            "An error occurred while generating the email. Please try again."
        );
    }
}
