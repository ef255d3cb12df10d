use crate::config::RankingConfig;
use crate::models::{FeedTrack, RankedPost};
use crate::services::interleave::InterleaveLayer;
use crate::services::recall::TopUpvotedRecall;
use crate::services::scoring::{AlgorithmicScorer, ViewerSignals};
use chrono::{DateTime, Utc};
use entity_models::{Post, UserInteraction, UserProfile};
use tracing::info;

/// Highlights feed ranker.
///
/// Pure over its inputs: the same posts, viewer, interactions and `now`
/// always produce the same feed. Holds no mutable state, so one instance can
/// serve concurrent requests.
///
/// # Pipeline
/// 1. Top-upvoted recall (national popularity track)
/// 2. Algorithmic scoring (personalized pool, capped by upvote ceiling)
/// 3. Interleave the two tracks in a fixed cadence, truncated to the feed limit
///
/// The upvote ceiling is the only thing keeping a post out of both tracks.
/// A post below the ceiling that also makes the top-upvoted cut can appear
/// twice in the feed.
pub struct FeedRanker {
    recall: TopUpvotedRecall,
    scorer: AlgorithmicScorer,
    interleave: InterleaveLayer,
}

impl FeedRanker {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            recall: TopUpvotedRecall::new(config.top_upvoted_limit),
            scorer: AlgorithmicScorer::from_config(config),
            interleave: InterleaveLayer::from_config(config),
        }
    }

    pub fn rank(
        &self,
        all_posts: &[Post],
        viewer: &UserProfile,
        viewer_interactions: &[UserInteraction],
    ) -> Vec<RankedPost> {
        self.rank_at(all_posts, viewer, viewer_interactions, Utc::now())
    }

    pub fn rank_at(
        &self,
        all_posts: &[Post],
        viewer: &UserProfile,
        viewer_interactions: &[UserInteraction],
        now: DateTime<Utc>,
    ) -> Vec<RankedPost> {
        if all_posts.is_empty() {
            return Vec::new();
        }

        let top_upvoted = self.recall.recall(all_posts);
        let signals = ViewerSignals::new(viewer, viewer_interactions);
        let algorithmic = self.scorer.pool(all_posts, &signals, now);

        let top_count = top_upvoted.len();
        let pool_count = algorithmic.len();
        let feed = self.interleave.interleave(top_upvoted, algorithmic);

        info!(
            viewer = %viewer.email,
            post_count = all_posts.len(),
            top_upvoted = top_count,
            algorithmic_pool = pool_count,
            emitted_top = feed.iter().filter(|r| r.track == FeedTrack::TopUpvoted).count(),
            final_count = feed.len(),
            "Highlights ranking completed"
        );

        feed
    }

    /// Like `rank`, without track and score annotations
    pub fn rank_posts(
        &self,
        all_posts: &[Post],
        viewer: &UserProfile,
        viewer_interactions: &[UserInteraction],
    ) -> Vec<Post> {
        self.rank(all_posts, viewer, viewer_interactions)
            .into_iter()
            .map(|r| r.post)
            .collect()
    }
}

impl Default for FeedRanker {
    fn default() -> Self {
        Self::new(&RankingConfig::default())
    }
}
