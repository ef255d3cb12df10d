pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, RankingConfig};
pub use error::{RankingError, Result};
pub use models::{FeedTrack, RankedPost, ScoreBreakdown};
pub use services::{FeedRanker, HighlightsService, InterleaveLayer, TopUpvotedRecall};
