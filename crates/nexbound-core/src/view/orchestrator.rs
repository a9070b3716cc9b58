use serde::Serialize;

use super::tab::ActiveTab;
use crate::campaign::Campaign;
use crate::draft::{DraftField, DraftForm};
use crate::error::Result;

/// A single change to the dashboard view.
///
/// Each message is applied in full before anyone can observe the state, so
/// `EditCampaign` never exposes the new tab with stale fields or the reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTransition {
    SelectTab(ActiveTab),
    /// Load the campaign into the form and switch to the writer.
    EditCampaign(Campaign),
    /// Clear the form and switch to the writer.
    StartNewDraft,
    UpdateField { field: DraftField, value: String },
}

/// Active tab and draft form of a mounted dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    active_tab: ActiveTab,
    draft: DraftForm,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    /// Mutable access for the submit cycle, which spans an await.
    pub fn draft_mut(&mut self) -> &mut DraftForm {
        &mut self.draft
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn edit_campaign(&mut self, campaign: &Campaign) {
        self.draft.populate_from_campaign(campaign);
        self.active_tab = ActiveTab::AiWriter;
    }

    pub fn start_new_draft(&mut self) {
        self.draft.reset();
        self.active_tab = ActiveTab::AiWriter;
    }

    pub fn apply(&mut self, transition: ViewTransition) -> Result<()> {
        match transition {
            ViewTransition::SelectTab(tab) => self.select_tab(tab),
            ViewTransition::EditCampaign(campaign) => self.edit_campaign(&campaign),
            ViewTransition::StartNewDraft => self.start_new_draft(),
            ViewTransition::UpdateField { field, value } => {
                self.draft.update_field(field, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignStatus;
    use crate::draft::{DraftFormFields, Tone};
    use strum::IntoEnumIterator;

    fn campaign(config: Option<DraftFormFields>, draft: Option<&str>) -> Campaign {
        Campaign {
            id: "c_t".into(),
            name: "Test".into(),
            status: CampaignStatus::Paused,
            sent: 1,
            opened: 1,
            replied: 0,
            draft_config: config,
            saved_draft: draft.map(str::to_string),
        }
    }

    #[test]
    fn test_select_tab_is_unconditional() {
        let mut view = ViewState::new();
        assert_eq!(view.active_tab(), ActiveTab::Overview);
        for from in ActiveTab::iter() {
            for to in ActiveTab::iter() {
                view.select_tab(from);
                view.select_tab(to);
                assert_eq!(view.active_tab(), to);
            }
        }
    }

    #[test]
    fn test_select_writer_keeps_form() {
        let mut view = ViewState::new();
        view.apply(ViewTransition::UpdateField {
            field: DraftField::RecipientName,
            value: "Ann".into(),
        })
        .unwrap();
        view.apply(ViewTransition::SelectTab(ActiveTab::AiWriter)).unwrap();

        assert_eq!(view.draft().fields().recipient_name, "Ann");
    }

    #[test]
    fn test_edit_campaign_updates_tab_and_form_together() {
        let config = DraftFormFields::new("n", "c", "v", Tone::Casual);
        let cases = [
            campaign(Some(config.clone()), Some("saved")),
            campaign(Some(config.clone()), None),
            campaign(None, Some("saved")),
            campaign(None, None),
        ];

        for c in cases {
            let mut view = ViewState::new();
            view.select_tab(ActiveTab::Campaigns);
            view.apply(ViewTransition::UpdateField {
                field: DraftField::CompanyName,
                value: "stale".into(),
            })
            .unwrap();

            view.apply(ViewTransition::EditCampaign(c.clone())).unwrap();

            assert_eq!(view.active_tab(), ActiveTab::AiWriter);
            assert_eq!(view.draft().fields(), &c.draft_config.clone().unwrap_or_default());
            assert_eq!(
                view.draft().generated_draft(),
                c.saved_draft.as_deref().unwrap_or("")
            );
        }
    }

    #[test]
    fn test_start_new_draft_clears_form() {
        let mut view = ViewState::new();
        view.edit_campaign(&campaign(
            Some(DraftFormFields::new("n", "c", "v", Tone::Persuasive)),
            Some("saved"),
        ));
        view.select_tab(ActiveTab::Overview);

        view.apply(ViewTransition::StartNewDraft).unwrap();

        assert_eq!(view.active_tab(), ActiveTab::AiWriter);
        assert_eq!(view.draft(), &DraftForm::default());
    }

    #[test]
    fn test_invalid_update_leaves_state_untouched() {
        let mut view = ViewState::new();
        let before = view.clone();
        let result = view.apply(ViewTransition::UpdateField {
            field: DraftField::Tone,
            value: "shouty".into(),
        });

        assert!(result.is_err());
        assert_eq!(view, before);
    }
}
