// Utility functions for highlights-ranking

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days elapsed from `then` to `now` (negative if `then` is later)
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - then).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Linear boost that starts at `window_days * per_day` for a brand new post
/// and reaches zero once the post is `window_days` old.
pub fn recency_boost(days_since_post: f64, window_days: f64, per_day: f64) -> f64 {
    if days_since_post < window_days {
        (window_days - days_since_post) * per_day
    } else {
        0.0
    }
}
