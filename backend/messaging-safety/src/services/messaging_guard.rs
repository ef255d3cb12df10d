use crate::error::{MessagingError, Result};
use crate::models::MessagingDecision;
use crate::services::messaging_policy::MessagingPolicy;
use entity_models::{EntityApi, UserProfile};
use tracing::{debug, warn};

/// Resolves both parties through the entity API and applies the policy
pub struct MessagingGuard<A: EntityApi> {
    api: A,
    policy: MessagingPolicy,
}

impl<A: EntityApi> MessagingGuard<A> {
    pub fn new(api: A, policy: MessagingPolicy) -> Self {
        Self { api, policy }
    }

    pub async fn check(&self, sender_email: &str, recipient_email: &str) -> Result<MessagingDecision> {
        let sender = self.resolve(sender_email).await?;
        let recipient = self.resolve(recipient_email).await?;

        let decision = self.policy.evaluate(&sender, &recipient);
        match decision.deny_reason() {
            Some(reason) => warn!(
                sender = sender_email,
                recipient = recipient_email,
                reason = reason.as_str(),
                "Direct message blocked"
            ),
            None => debug!(
                sender = sender_email,
                recipient = recipient_email,
                "Direct message allowed"
            ),
        }

        Ok(decision)
    }

    async fn resolve(&self, email: &str) -> Result<UserProfile> {
        self.api
            .find_users_by_email(email)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| MessagingError::ProfileNotFound(email.to_string()))
    }
}
