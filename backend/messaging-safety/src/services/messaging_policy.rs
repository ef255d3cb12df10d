use crate::config::PolicyConfig;
use crate::models::{AllowReason, DenyReason, MessagingDecision};
use chrono::{NaiveDate, Utc};
use entity_models::UserProfile;

/// Age-gated direct-message policy.
///
/// Rules, in order:
/// 1. Coaches/organizers may message and be messaged by anyone.
/// 2. Both ages must be known, otherwise the message is denied.
/// 3. Minors may only message minors, adults only adults.
#[derive(Debug, Clone, Default)]
pub struct MessagingPolicy {
    config: PolicyConfig,
}

impl MessagingPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, sender: &UserProfile, recipient: &UserProfile) -> MessagingDecision {
        self.evaluate_on(sender, recipient, Utc::now().date_naive())
    }

    pub fn evaluate_on(
        &self,
        sender: &UserProfile,
        recipient: &UserProfile,
        today: NaiveDate,
    ) -> MessagingDecision {
        if sender.is_coach_organizer() || recipient.is_coach_organizer() {
            return MessagingDecision::Allowed(AllowReason::CoachOrganizer);
        }

        let adult_age = self.config.adult_age;
        let (sender_group, recipient_group) = match (
            sender.age_group_on(today, adult_age),
            recipient.age_group_on(today, adult_age),
        ) {
            (Some(s), Some(r)) => (s, r),
            _ => return MessagingDecision::Denied(DenyReason::UnknownAge),
        };

        if sender_group == recipient_group {
            MessagingDecision::Allowed(AllowReason::SameAgeGroup(sender_group))
        } else {
            MessagingDecision::Denied(DenyReason::CrossAgeGroup)
        }
    }

    pub fn can_message_on(&self, sender: &UserProfile, recipient: &UserProfile, today: NaiveDate) -> bool {
        self.evaluate_on(sender, recipient, today).is_allowed()
    }
}

/// Default policy (adult at 18), evaluated against today's date
pub fn can_message(sender: &UserProfile, recipient: &UserProfile) -> bool {
    MessagingPolicy::default().evaluate(sender, recipient).is_allowed()
}
