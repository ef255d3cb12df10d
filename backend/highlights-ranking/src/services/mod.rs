pub mod feed_ranker;
pub mod highlights;
pub mod interleave;
pub mod recall;
pub mod scoring;

pub use feed_ranker::FeedRanker;
pub use highlights::HighlightsService;
pub use interleave::{CadenceTier, InterleaveLayer};
pub use recall::TopUpvotedRecall;
pub use scoring::{AlgorithmicScorer, ScoreWeights, ViewerSignals};
