use crate::models::RankedPost;
use entity_models::Post;
use tracing::debug;

/// Top-upvoted recall - the national popularity track.
/// Ranks every post by upvote count and keeps the head of the list.
pub struct TopUpvotedRecall {
    limit: usize,
}

impl TopUpvotedRecall {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Ties keep their relative input order (stable sort)
    pub fn recall(&self, posts: &[Post]) -> Vec<RankedPost> {
        let mut sorted: Vec<&Post> = posts.iter().collect();
        sorted.sort_by(|a, b| b.upvote_count().cmp(&a.upvote_count()));

        let recalled: Vec<RankedPost> = sorted
            .into_iter()
            .take(self.limit)
            .map(|p| RankedPost::top_upvoted(p.clone()))
            .collect();

        debug!(
            input_count = posts.len(),
            recalled = recalled.len(),
            "Top-upvoted recall completed"
        );

        recalled
    }
}
