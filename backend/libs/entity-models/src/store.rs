use crate::api::{EntityApi, PostFilter};
use crate::error::Result;
use crate::interaction::UserInteraction;
use crate::post::Post;
use crate::user::UserProfile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;

/// A frozen copy of the entity collections, as exported from the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySnapshot {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub interactions: Vec<UserInteraction>,
    /// Email of the signed-in user
    #[serde(default)]
    pub me: Option<String>,
}

impl EntitySnapshot {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_json(&raw)?)
    }
}

/// `EntityApi` served from an in-memory snapshot
pub struct InMemoryEntityStore {
    snapshot: EntitySnapshot,
}

impl InMemoryEntityStore {
    pub fn new(snapshot: EntitySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &EntitySnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl EntityApi for InMemoryEntityStore {
    async fn list_posts(&self, order_by: &str) -> anyhow::Result<Vec<Post>> {
        let mut posts = self.snapshot.posts.clone();
        match order_by {
            "-createdAt" => posts.sort_by(|a, b| compare_created_at(a, b, true)),
            "createdAt" => posts.sort_by(|a, b| compare_created_at(a, b, false)),
            other => debug!(order_by = other, "Unsupported ordering, returning input order"),
        }
        Ok(posts)
    }

    async fn filter_posts(&self, filter: &PostFilter) -> anyhow::Result<Vec<Post>> {
        Ok(self
            .snapshot
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn filter_interactions(&self, user_email: &str) -> anyhow::Result<Vec<UserInteraction>> {
        Ok(self
            .snapshot
            .interactions
            .iter()
            .filter(|i| i.user_email == user_email)
            .cloned()
            .collect())
    }

    async fn me(&self) -> anyhow::Result<Option<UserProfile>> {
        let Some(email) = self.snapshot.me.as_deref() else {
            return Ok(None);
        };
        Ok(self.find_users_by_email(email).await?.into_iter().next())
    }

    async fn find_users_by_email(&self, email: &str) -> anyhow::Result<Vec<UserProfile>> {
        Ok(self
            .snapshot
            .users
            .iter()
            .filter(|u| u.email == email)
            .cloned()
            .collect())
    }
}

/// Posts without a timestamp sort after dated ones in either direction
fn compare_created_at(a: &Post, b: &Post, descending: bool) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
