use crate::error::{RankingError, Result};
use crate::models::RankedPost;
use crate::services::feed_ranker::FeedRanker;
use entity_models::{EntityApi, UserProfile};
use tracing::{info, warn};

const POSTS_ORDER_BY: &str = "-createdAt";

/// Fetches a fresh snapshot from the entity API and ranks it.
/// Nothing is cached between calls.
pub struct HighlightsService<A: EntityApi> {
    api: A,
    ranker: FeedRanker,
}

impl<A: EntityApi> HighlightsService<A> {
    pub fn new(api: A, ranker: FeedRanker) -> Self {
        Self { api, ranker }
    }

    /// Highlights for the signed-in user
    pub async fn highlights_for_me(&self) -> Result<Vec<RankedPost>> {
        let viewer = self.api.me().await?.ok_or(RankingError::NotSignedIn)?;
        self.highlights_for_viewer(&viewer).await
    }

    pub async fn highlights_for(&self, viewer_email: &str) -> Result<Vec<RankedPost>> {
        let viewer = self
            .api
            .find_users_by_email(viewer_email)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                warn!(viewer = viewer_email, "Highlights requested for unknown viewer");
                RankingError::ViewerNotFound(viewer_email.to_string())
            })?;
        self.highlights_for_viewer(&viewer).await
    }

    async fn highlights_for_viewer(&self, viewer: &UserProfile) -> Result<Vec<RankedPost>> {
        let posts = self.api.list_posts(POSTS_ORDER_BY).await?;
        let interactions = self.api.filter_interactions(&viewer.email).await?;

        info!(
            viewer = %viewer.email,
            posts = posts.len(),
            interactions = interactions.len(),
            "Fetched highlights inputs"
        );

        Ok(self.ranker.rank(&posts, viewer, &interactions))
    }
}
