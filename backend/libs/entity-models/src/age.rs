use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Segment a profile falls into for messaging purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Minor,
    Adult,
}

impl AgeGroup {
    /// `adult_age` itself counts as adult
    pub fn from_age(age: u32, adult_age: u32) -> Self {
        if age < adult_age {
            AgeGroup::Minor
        } else {
            AgeGroup::Adult
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Minor => "minor",
            AgeGroup::Adult => "adult",
        }
    }
}

/// Whole years between `date_of_birth` and `today`.
///
/// A year only counts once the birthday has occurred in `today`'s year.
/// Returns `None` for a date of birth after `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(date_of_birth)
}
