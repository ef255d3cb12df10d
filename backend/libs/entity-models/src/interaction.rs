use crate::error::{ModelError, Result};
use crate::serde_utils::{lenient_timestamp, null_as_default};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded user action (follow, save, rsvp, ...) against some entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInteraction {
    pub user_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interaction_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_type: String,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserInteraction {
    pub fn new(
        user_email: impl Into<String>,
        interaction_type: impl Into<String>,
        target_type: impl Into<String>,
        target_id: Option<String>,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            interaction_type: interaction_type.into(),
            target_type: target_type.into(),
            target_id,
            created_at: None,
        }
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let interaction: UserInteraction = serde_json::from_value(value)?;
        if interaction.user_email.trim().is_empty() {
            return Err(ModelError::MissingField("userEmail"));
        }
        Ok(interaction)
    }

    pub fn targets_post(&self) -> bool {
        self.target_type.eq_ignore_ascii_case("post")
    }
}
