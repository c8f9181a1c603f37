//! Engagement scoring and post selection.
//!
//! The score is a fixed weighted sum: reposts and quotes carry more weight
//! than likes (a stronger endorsement signal), replies carry less (replies
//! can be organic disagreement or noise).
//!
//! `score = likes + 2*reposts + 3*quotes + 0.5*replies`

use crate::model::{EngagementMetrics, ScoredPost, SourcePost};

/// Weight applied to the like count.
pub const LIKE_WEIGHT: f64 = 1.0;
/// Weight applied to the repost count.
pub const REPOST_WEIGHT: f64 = 2.0;
/// Weight applied to the quote count.
pub const QUOTE_WEIGHT: f64 = 3.0;
/// Weight applied to the reply count.
pub const REPLY_WEIGHT: f64 = 0.5;

/// Compute the composite engagement score for a metrics record.
pub fn engagement_score(metrics: &EngagementMetrics) -> f64 {
    metrics.likes as f64 * LIKE_WEIGHT
        + metrics.reposts as f64 * REPOST_WEIGHT
        + metrics.quotes as f64 * QUOTE_WEIGHT
        + metrics.replies as f64 * REPLY_WEIGHT
}

/// Select the highest-scoring post from a candidate set.
///
/// Returns `None` for an empty set. Ties break to the earliest post in input
/// order; callers pass posts most-recent-first, so a tie resolves to the most
/// recent post. Selection is deterministic for identical input.
pub fn select_top(posts: Vec<SourcePost>) -> Option<ScoredPost> {
    let mut best: Option<ScoredPost> = None;

    for post in posts {
        let score = engagement_score(&post.metrics);
        match best {
            // Strictly greater: an equal score never displaces an earlier post
            Some(ref current) if score <= current.score => {}
            _ => best = Some(ScoredPost { post, score }),
        }
    }

    best
}
