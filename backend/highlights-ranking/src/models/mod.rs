use entity_models::Post;
use serde::Serialize;

/// Which track of the feed a post was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedTrack {
    TopUpvoted,  // national top-upvoted track
    Algorithmic, // personalized pool
}

impl FeedTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedTrack::TopUpvoted => "top_upvoted",
            FeedTrack::Algorithmic => "algorithmic",
        }
    }
}

/// Per-component personalization score of an algorithmic post
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub interest: f64,
    pub interaction: f64,
    pub recency: f64,
    pub engagement: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedPost {
    pub post: Post,
    pub track: FeedTrack,
    /// Only set for algorithmic entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreBreakdown>,
}

impl RankedPost {
    pub fn top_upvoted(post: Post) -> Self {
        Self {
            post,
            track: FeedTrack::TopUpvoted,
            score: None,
        }
    }

    pub fn algorithmic(post: Post, score: ScoreBreakdown) -> Self {
        Self {
            post,
            track: FeedTrack::Algorithmic,
            score: Some(score),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post.id
    }
}
