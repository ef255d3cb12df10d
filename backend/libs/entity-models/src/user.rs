use crate::age::{age_on, AgeGroup};
use crate::error::{ModelError, Result};
use crate::serde_utils::{lenient_date, null_as_default};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    CoachOrganizer,
    Fan,
    TeamMember,
    #[default]
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::CoachOrganizer => "coach_organizer",
            UserRole::Fan => "fan",
            UserRole::TeamMember => "team_member",
            UserRole::Other => "other",
        }
    }
}

/// The slice of a user record that ranking and messaging care about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_role: UserRole,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sports_interests: BTreeSet<String>,
}

impl UserProfile {
    pub fn new(email: impl Into<String>, user_role: UserRole) -> Self {
        Self {
            email: email.into(),
            date_of_birth: None,
            user_role,
            sports_interests: BTreeSet::new(),
        }
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sports_interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let profile: UserProfile = serde_json::from_value(value)?;
        if profile.email.trim().is_empty() {
            return Err(ModelError::MissingField("email"));
        }
        Ok(profile)
    }

    pub fn is_coach_organizer(&self) -> bool {
        self.user_role == UserRole::CoachOrganizer
    }

    /// `None` when the date of birth is absent or lies in the future
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.and_then(|dob| age_on(dob, today))
    }

    pub fn age_group_on(&self, today: NaiveDate, adult_age: u32) -> Option<AgeGroup> {
        self.age_on(today).map(|age| AgeGroup::from_age(age, adult_age))
    }
}
