use crate::config::RankingConfig;
use crate::models::RankedPost;
use tracing::debug;

/// One stage of the cadence: until `until` top-upvoted posts have been
/// emitted, each step emits `algorithmic_per_step` algorithmic posts followed
/// by one top-upvoted post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceTier {
    pub until: usize,
    pub algorithmic_per_step: usize,
}

/// Interleave Layer - merges the two feed tracks in a fixed cadence
pub struct InterleaveLayer {
    lead_count: usize,
    tiers: Vec<CadenceTier>,
    limit: usize,
}

impl InterleaveLayer {
    pub fn new(lead_count: usize, tiers: Vec<CadenceTier>, limit: usize) -> Self {
        Self {
            lead_count,
            tiers,
            limit,
        }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(
            config.lead_count,
            vec![
                CadenceTier {
                    until: config.first_tier_until,
                    algorithmic_per_step: config.first_tier_algorithmic,
                },
                CadenceTier {
                    until: config.second_tier_until,
                    algorithmic_per_step: config.second_tier_algorithmic,
                },
            ],
            config.feed_limit,
        )
    }

    /// Both tracks are consumed front to back with independent cursors.
    /// Top-upvoted posts past the last tier are not emitted.
    pub fn interleave(&self, top_upvoted: Vec<RankedPost>, algorithmic: Vec<RankedPost>) -> Vec<RankedPost> {
        let mut upvoted = top_upvoted.into_iter().peekable();
        let mut algo = algorithmic.into_iter();
        let mut upvoted_idx = 0;
        let mut result = Vec::with_capacity(self.limit);

        // Lead: top-upvoted only
        while upvoted_idx < self.lead_count {
            match upvoted.next() {
                Some(post) => {
                    result.push(post);
                    upvoted_idx += 1;
                }
                None => break,
            }
        }

        for tier in &self.tiers {
            while upvoted_idx < tier.until && upvoted.peek().is_some() {
                result.extend(algo.by_ref().take(tier.algorithmic_per_step));
                if let Some(post) = upvoted.next() {
                    result.push(post);
                    upvoted_idx += 1;
                }
            }
        }

        // Tail: whatever is left of the algorithmic pool
        let remaining = self.limit.saturating_sub(result.len());
        result.extend(algo.take(remaining));
        result.truncate(self.limit);

        debug!(
            emitted = result.len(),
            upvoted_emitted = upvoted_idx,
            "Interleave completed"
        );

        result
    }
}

impl Default for InterleaveLayer {
    fn default() -> Self {
        Self::from_config(&RankingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedTrack, ScoreBreakdown};
    use entity_models::Post;

    fn upvoted(n: usize) -> Vec<RankedPost> {
        (1..=n)
            .map(|i| RankedPost::top_upvoted(Post::new(format!("U{}", i), "a@x.com")))
            .collect()
    }

    fn algorithmic(n: usize) -> Vec<RankedPost> {
        (1..=n)
            .map(|i| RankedPost::algorithmic(Post::new(format!("A{}", i), "a@x.com"), ScoreBreakdown::default()))
            .collect()
    }

    fn pattern(feed: &[RankedPost]) -> String {
        feed.iter()
            .map(|r| match r.track {
                FeedTrack::TopUpvoted => 'U',
                FeedTrack::Algorithmic => 'A',
            })
            .collect()
    }

    #[test]
    fn test_full_cadence_truncated_to_limit() {
        let feed = InterleaveLayer::default().interleave(upvoted(20), algorithmic(60));

        assert_eq!(feed.len(), 50);
        let expected = format!("UUU{}{}AA", "AAU".repeat(7), "AAAU".repeat(6));
        assert_eq!(pattern(&feed), expected);
        assert_eq!(feed[3].post_id(), "A1");
        assert_eq!(feed[5].post_id(), "U4");
    }

    #[test]
    fn test_lead_does_not_wait_for_algorithmic() {
        let feed = InterleaveLayer::default().interleave(upvoted(2), algorithmic(3));
        let ids: Vec<_> = feed.iter().map(|r| r.post_id()).collect();
        assert_eq!(ids, vec!["U1", "U2", "A1", "A2", "A3"]);
    }

    #[test]
    fn test_exhausted_algorithmic_pool_skips_slots() {
        let feed = InterleaveLayer::default().interleave(upvoted(6), algorithmic(3));
        let ids: Vec<_> = feed.iter().map(|r| r.post_id()).collect();
        assert_eq!(ids, vec!["U1", "U2", "U3", "A1", "A2", "U4", "A3", "U5", "U6"]);
    }

    #[test]
    fn test_only_algorithmic() {
        let feed = InterleaveLayer::default().interleave(Vec::new(), algorithmic(70));
        assert_eq!(feed.len(), 50);
        assert_eq!(feed[0].post_id(), "A1");
        assert_eq!(feed[49].post_id(), "A50");
    }

    #[test]
    fn test_empty_tracks() {
        assert!(InterleaveLayer::default().interleave(Vec::new(), Vec::new()).is_empty());
    }
}
