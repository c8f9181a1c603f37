//! Domain models and value objects

use serde::{Deserialize, Serialize};

/// Engagement counts attached to a post. All counts are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Like count
    pub likes: u64,
    /// Repost/retweet count
    pub reposts: u64,
    /// Quote count
    pub quotes: u64,
    /// Reply count
    pub replies: u64,
}

/// A source post from the watched platform (X/Twitter).
///
/// Immutable once fetched; the pipeline never mutates posts, only scores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePost {
    /// Platform-specific post ID
    pub id: String,
    /// Platform-internal author identifier
    pub author_id: String,
    /// Post text content
    pub text: String,
    /// Engagement metrics at fetch time
    pub metrics: EngagementMetrics,
}

/// A post together with its derived engagement score.
///
/// Recomputed every invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPost {
    pub post: SourcePost,
    pub score: f64,
}

/// Parameters of the triggering event. Lifetime is one pipeline run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerEvent {
    /// Username whose posts are scanned; the configured fallback applies when absent
    pub source: Option<String>,
}

/// The platform's confirmation for a published quote post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReceipt {
    /// ID of the newly created post, when the platform reports one
    pub post_id: Option<String>,
    /// URL to the published post, if derivable
    pub url: Option<String>,
    /// Raw confirmation body, passed through opaquely to the caller
    pub raw: serde_json::Value,
}

/// Outcome of a single pipeline run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The top-scoring post was quoted successfully
    Published {
        source: String,
        selected: ScoredPost,
        comment: String,
        receipt: PublishReceipt,
    },
    /// Dry run: a post was selected and a comment composed, but nothing was published
    DryRun {
        source: String,
        selected: ScoredPost,
        comment: String,
    },
    /// The account had no original posts to score; benign, not an error
    NoPosts { source: String },
}
