use entity_models::AgeGroup;
use serde::Serialize;

/// Outcome of a direct-message permission check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum MessagingDecision {
    Allowed(AllowReason),
    Denied(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowReason {
    /// Sender or recipient is a coach/organizer
    CoachOrganizer,
    /// Both sides are in the same age group
    SameAgeGroup(AgeGroup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// At least one side has no usable date of birth
    UnknownAge,
    /// One side is a minor and the other an adult
    CrossAgeGroup,
}

impl MessagingDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, MessagingDecision::Allowed(_))
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            MessagingDecision::Allowed(_) => None,
            MessagingDecision::Denied(reason) => Some(*reason),
        }
    }
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::UnknownAge => "unknown_age",
            DenyReason::CrossAgeGroup => "cross_age_group",
        }
    }

    /// Copy shown to the sender when a message is blocked
    pub fn user_message(&self) -> &'static str {
        match self {
            DenyReason::UnknownAge => {
                "Messaging is unavailable until both accounts have a date of birth on file."
            }
            DenyReason::CrossAgeGroup => {
                "For safety, minors can only message other minors and adults can only message adults. Coaches and organizers can message anyone."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_helpers() {
        let allowed = MessagingDecision::Allowed(AllowReason::CoachOrganizer);
        assert!(allowed.is_allowed());
        assert_eq!(allowed.deny_reason(), None);

        let denied = MessagingDecision::Denied(DenyReason::CrossAgeGroup);
        assert!(!denied.is_allowed());
        assert_eq!(denied.deny_reason(), Some(DenyReason::CrossAgeGroup));
        assert_eq!(DenyReason::UnknownAge.as_str(), "unknown_age");
        assert!(!DenyReason::CrossAgeGroup.user_message().is_empty());
    }
}
