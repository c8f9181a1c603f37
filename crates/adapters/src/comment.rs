//! Canned comment generator
//!
//! A stub implementation of the `CommentGenerator` port: uniformly picks one
//! string from a fixed sample list, independent of the post's content. A
//! content-aware generator (e.g. an LLM call) replaces this behind the same
//! port without interface changes.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use requote_domain::CommentGenerator;

/// Default reaction samples, one of which is attached to the quoted post.
pub const DEFAULT_SAMPLES: [&str; 4] = [
    "This is spot on 🚀",
    "Must read 👇",
    "Absolutely true 💯",
    "Love this insight ✨",
];

/// Comment generator that picks uniformly from a fixed sample list.
pub struct CannedCommentGenerator {
    samples: Vec<String>,
}

impl CannedCommentGenerator {
    /// Create a generator with the default sample list
    pub fn new() -> Self {
        Self {
            samples: DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a generator with custom samples; falls back to the defaults
    /// when the list is empty
    pub fn with_samples(samples: Vec<String>) -> Self {
        if samples.is_empty() {
            Self::new()
        } else {
            Self { samples }
        }
    }
}

impl Default for CannedCommentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentGenerator for CannedCommentGenerator {
    async fn comment(&self, _post_text: &str) -> String {
        self.samples
            .choose(&mut rand::rng())
            .expect("sample list is never empty")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_comment_is_one_of_the_samples() {
        let generator = CannedCommentGenerator::new();

        for _ in 0..20 {
            let comment = generator.comment("whatever").await;
            assert!(DEFAULT_SAMPLES.contains(&comment.as_str()));
        }
    }

    #[tokio::test]
    async fn test_comment_ignores_post_text() {
        let generator =
            CannedCommentGenerator::with_samples(vec!["only option".to_string()]);

        assert_eq!(generator.comment("first post").await, "only option");
        assert_eq!(generator.comment("different post").await, "only option");
    }

    #[tokio::test]
    async fn test_empty_samples_fall_back_to_defaults() {
        let generator = CannedCommentGenerator::with_samples(vec![]);

        let comment = generator.comment("post").await;
        assert!(DEFAULT_SAMPLES.contains(&comment.as_str()));
    }

    #[tokio::test]
    async fn test_all_samples_are_reachable() {
        let generator = CannedCommentGenerator::new();

        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(generator.comment("post").await);
        }
        assert_eq!(seen.len(), DEFAULT_SAMPLES.len());
    }
}
