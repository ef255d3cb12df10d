// ============================================
// Algorithmic Scorer
// ============================================
//
// Personalized pool for the Highlights feed.
//
// Score components:
// - Interest match: content mentions one of the viewer's sports interests
// - Post interaction: viewer has interacted with any post at all (flat)
// - Recency: linear decay over the recency window
// - Engagement: weighted upvotes + likes

use crate::config::RankingConfig;
use crate::models::{RankedPost, ScoreBreakdown};
use crate::utils::{days_between, recency_boost};
use chrono::{DateTime, Utc};
use entity_models::{Post, UserInteraction, UserProfile};
use tracing::{debug, info};

/// Score weights, lifted out of `RankingConfig`
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub interest_match: f64,
    pub post_interaction: f64,
    pub recency_window_days: f64,
    pub recency_per_day: f64,
    pub engagement: f64,
}

impl From<&RankingConfig> for ScoreWeights {
    fn from(config: &RankingConfig) -> Self {
        Self {
            interest_match: config.interest_match_boost,
            post_interaction: config.post_interaction_boost,
            recency_window_days: config.recency_window_days,
            recency_per_day: config.recency_boost_per_day,
            engagement: config.engagement_weight,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::from(&RankingConfig::default())
    }
}

/// Viewer signals, computed once per ranking call
#[derive(Debug, Clone, Default)]
pub struct ViewerSignals {
    /// Lowercased, blank entries dropped
    pub interests: Vec<String>,
    pub has_post_interaction: bool,
}

impl ViewerSignals {
    pub fn new(viewer: &UserProfile, interactions: &[UserInteraction]) -> Self {
        let interests = viewer
            .sports_interests
            .iter()
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();

        Self {
            interests,
            has_post_interaction: interactions.iter().any(UserInteraction::targets_post),
        }
    }

    fn matches_interest(&self, content: &str) -> bool {
        if self.interests.is_empty() {
            return false;
        }
        let content = content.to_lowercase();
        self.interests.iter().any(|i| content.contains(i.as_str()))
    }
}

pub struct AlgorithmicScorer {
    weights: ScoreWeights,
    /// Posts at or above this upvote count belong to the top-upvoted track
    upvote_ceiling: usize,
}

impl AlgorithmicScorer {
    pub fn new(weights: ScoreWeights, upvote_ceiling: usize) -> Self {
        Self {
            weights,
            upvote_ceiling,
        }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(ScoreWeights::from(config), config.algorithmic_upvote_ceiling)
    }

    /// Score every post, order by score descending (stable), then drop posts
    /// that reached the upvote ceiling.
    pub fn pool(&self, posts: &[Post], signals: &ViewerSignals, now: DateTime<Utc>) -> Vec<RankedPost> {
        let mut scored: Vec<(&Post, ScoreBreakdown)> = posts
            .iter()
            .map(|p| (p, self.score(p, signals, now)))
            .collect();

        scored.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));

        let pool: Vec<RankedPost> = scored
            .into_iter()
            .filter(|(p, _)| p.upvote_count() < self.upvote_ceiling)
            .map(|(p, score)| RankedPost::algorithmic(p.clone(), score))
            .collect();

        info!(
            input_count = posts.len(),
            pool_size = pool.len(),
            has_post_interaction = signals.has_post_interaction,
            "Algorithmic scoring completed"
        );

        pool
    }

    pub fn score(&self, post: &Post, signals: &ViewerSignals, now: DateTime<Utc>) -> ScoreBreakdown {
        let interest = if signals.matches_interest(&post.content) {
            self.weights.interest_match
        } else {
            0.0
        };
        let interaction = if signals.has_post_interaction {
            self.weights.post_interaction
        } else {
            0.0
        };
        let recency = post
            .created_at
            .map(|created| {
                recency_boost(
                    days_between(created, now),
                    self.weights.recency_window_days,
                    self.weights.recency_per_day,
                )
            })
            .unwrap_or(0.0);
        let engagement = self.weights.engagement * post.engagement_count() as f64;

        let total = interest + interaction + recency + engagement;

        debug!(
            post_id = %post.id,
            interest = interest,
            interaction = interaction,
            recency = recency,
            engagement = engagement,
            total = total,
            "Algorithmic score computed"
        );

        ScoreBreakdown {
            interest,
            interaction,
            recency,
            engagement,
            total,
        }
    }
}
