use crate::error::{RankingError, Result};
use serde::Deserialize;
use std::env;

const ENV_PREFIX: &str = "HIGHLIGHTS_";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub ranking: RankingConfig,
}

/// Knobs of the Highlights feed. Defaults reproduce the production feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingConfig {
    /// Size of the nationally top-upvoted track
    #[serde(default = "default_top_upvoted_limit")]
    pub top_upvoted_limit: usize,
    /// Maximum number of posts in the final feed
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
    /// Posts with at least this many upvotes never enter the algorithmic pool
    #[serde(default = "default_algorithmic_upvote_ceiling")]
    pub algorithmic_upvote_ceiling: usize,

    #[serde(default = "default_interest_match_boost")]
    pub interest_match_boost: f64,
    #[serde(default = "default_post_interaction_boost")]
    pub post_interaction_boost: f64,
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: f64,
    #[serde(default = "default_recency_boost_per_day")]
    pub recency_boost_per_day: f64,
    #[serde(default = "default_engagement_weight")]
    pub engagement_weight: f64,

    // Interleave cadence
    #[serde(default = "default_lead_count")]
    pub lead_count: usize,
    #[serde(default = "default_first_tier_until")]
    pub first_tier_until: usize,
    #[serde(default = "default_first_tier_algorithmic")]
    pub first_tier_algorithmic: usize,
    #[serde(default = "default_second_tier_until")]
    pub second_tier_until: usize,
    #[serde(default = "default_second_tier_algorithmic")]
    pub second_tier_algorithmic: usize,
}

fn default_top_upvoted_limit() -> usize {
    20
}
fn default_feed_limit() -> usize {
    50
}
fn default_algorithmic_upvote_ceiling() -> usize {
    10
}
fn default_interest_match_boost() -> f64 {
    10.0
}
fn default_post_interaction_boost() -> f64 {
    5.0
}
fn default_recency_window_days() -> f64 {
    7.0
}
fn default_recency_boost_per_day() -> f64 {
    2.0
}
fn default_engagement_weight() -> f64 {
    0.5
}
fn default_lead_count() -> usize {
    3
}
fn default_first_tier_until() -> usize {
    10
}
fn default_first_tier_algorithmic() -> usize {
    2
}
fn default_second_tier_until() -> usize {
    20
}
fn default_second_tier_algorithmic() -> usize {
    3
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_upvoted_limit: default_top_upvoted_limit(),
            feed_limit: default_feed_limit(),
            algorithmic_upvote_ceiling: default_algorithmic_upvote_ceiling(),
            interest_match_boost: default_interest_match_boost(),
            post_interaction_boost: default_post_interaction_boost(),
            recency_window_days: default_recency_window_days(),
            recency_boost_per_day: default_recency_boost_per_day(),
            engagement_weight: default_engagement_weight(),
            lead_count: default_lead_count(),
            first_tier_until: default_first_tier_until(),
            first_tier_algorithmic: default_first_tier_algorithmic(),
            second_tier_until: default_second_tier_until(),
            second_tier_algorithmic: default_second_tier_algorithmic(),
        }
    }
}

impl RankingConfig {
    /// Build from `HIGHLIGHTS_*` style key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: RankingConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed_limit == 0 {
            return Err(RankingError::Config("feed_limit must be positive".to_string()));
        }
        let weights = [
            ("interest_match_boost", self.interest_match_boost),
            ("post_interaction_boost", self.post_interaction_boost),
            ("recency_window_days", self.recency_window_days),
            ("recency_boost_per_day", self.recency_boost_per_day),
            ("engagement_weight", self.engagement_weight),
        ];
        if let Some((name, value)) = weights.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RankingError::Config(format!("{} must be finite, got {}", name, value)));
        }
        if self.recency_window_days < 0.0 {
            return Err(RankingError::Config(
                "recency_window_days must not be negative".to_string(),
            ));
        }
        if self.lead_count > self.first_tier_until || self.first_tier_until > self.second_tier_until {
            return Err(RankingError::Config(format!(
                "cadence thresholds must be ascending: lead={} first={} second={}",
                self.lead_count, self.first_tier_until, self.second_tier_until
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "highlights-ranking".to_string()),
            ranking: RankingConfig::from_vars(env::vars())?,
        })
    }
}
