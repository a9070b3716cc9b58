//! Draft request domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{NexboundError, Result};

/// Tone of the generated email.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Persuasive,
}

/// Names of the individual draft form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DraftField {
    #[strum(to_string = "recipient_name", serialize = "recipient")]
    RecipientName,
    #[strum(to_string = "company_name", serialize = "company")]
    CompanyName,
    #[strum(to_string = "value_proposition", serialize = "value_prop")]
    ValueProposition,
    Tone,
}

/// Fields of a draft request.
///
/// Also used as a campaign's saved draft configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFormFields {
    pub recipient_name: String,
    pub company_name: String,
    pub value_proposition: String,
    #[serde(default)]
    pub tone: Tone,
}

impl DraftFormFields {
    pub fn new(
        recipient_name: impl Into<String>,
        company_name: impl Into<String>,
        value_proposition: impl Into<String>,
        tone: Tone,
    ) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            company_name: company_name.into(),
            value_proposition: value_proposition.into(),
            tone,
        }
    }

    /// Returns the current value of a field as text.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::RecipientName => &self.recipient_name,
            DraftField::CompanyName => &self.company_name,
            DraftField::ValueProposition => &self.value_proposition,
            DraftField::Tone => self.tone.as_ref(),
        }
    }

    /// Sets exactly one field. No cross-field validation happens here.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `field` is `Tone` and `value` is not a known tone.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            DraftField::RecipientName => self.recipient_name = value,
            DraftField::CompanyName => self.company_name = value,
            DraftField::ValueProposition => self.value_proposition = value,
            DraftField::Tone => {
                self.tone = value
                    .trim()
                    .parse()
                    .map_err(|_| NexboundError::validation(format!("Unknown tone '{value}'")))?;
            }
        }
        Ok(())
    }

    /// Text fields that are still blank.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [
            DraftField::RecipientName,
            DraftField::CompanyName,
            DraftField::ValueProposition,
        ]
        .into_iter()
        .filter(|field| self.get(*field).trim().is_empty())
        .collect()
    }

    /// Checks that every required text field is filled in.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        let names: Vec<&str> = missing.iter().map(|f| f.as_ref()).collect();
        Err(NexboundError::validation(format!(
            "Required fields are empty: {}",
            names.join(", ")
        )))
    }
}
