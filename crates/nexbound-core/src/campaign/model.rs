//! Campaign and analytics domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::draft::DraftFormFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    /// Capitalized label for tables ("Active", "Paused", "Completed").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

/// An outbound campaign owned by the data collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub sent: u32,
    pub opened: u32,
    pub replied: u32,
    /// Saved AI writer configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_config: Option<DraftFormFields>,
    /// Last draft generated for this campaign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_draft: Option<String>,
}

impl Campaign {
    /// Opened as a whole percentage of sent; 0 when nothing was sent.
    pub fn open_rate(&self) -> u32 {
        percent(self.opened, self.sent)
    }

    /// Replied as a whole percentage of sent; 0 when nothing was sent.
    pub fn reply_rate(&self) -> u32 {
        percent(self.replied, self.sent)
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rate = (u64::from(part) * 100 + u64::from(whole) / 2) / u64::from(whole);
    u32::try_from(rate).unwrap_or(u32::MAX)
}

/// Aggregate numbers shown on the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_sent: u32,
    /// Percent
    pub avg_open_rate: u32,
    /// Percent
    pub avg_reply_rate: u32,
    pub active_leads: u32,
}

/// One day of the weekly activity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub day: String,
    pub sent: u32,
    pub opened: u32,
    pub replied: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(sent: u32, opened: u32, replied: u32) -> Campaign {
        Campaign {
            id: "c_x".into(),
            name: "Test".into(),
            status: CampaignStatus::Active,
            sent,
            opened,
            replied,
            draft_config: None,
            saved_draft: None,
        }
    }

    #[test]
    fn test_rates() {
        let c = campaign(1240, 850, 120);
        assert_eq!(c.open_rate(), 69);
        assert_eq!(c.reply_rate(), 10);
    }

    #[test]
    fn test_rates_with_nothing_sent() {
        let c = campaign(0, 0, 0);
        assert_eq!(c.open_rate(), 0);
        assert_eq!(c.reply_rate(), 0);
    }

    #[test]
    fn test_rates_saturate_when_part_exceeds_whole() {
        let c = campaign(1, u32::MAX, 0);
        assert_eq!(c.open_rate(), u32::MAX);
        assert_eq!(campaign(3, 6, 0).open_rate(), 200);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(CampaignStatus::Paused.to_string(), "paused");
        assert_eq!(CampaignStatus::Paused.label(), "Paused");
        assert_eq!("completed".parse::<CampaignStatus>().unwrap(), CampaignStatus::Completed);
    }
}
