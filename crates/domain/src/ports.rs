//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::model::{PublishReceipt, SourcePost};

/// Error type for credential store operations
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Secret '{0}' not found in credential store")]
    NotFound(String),
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Port for retrieving stored API credentials.
///
/// Tokens are fetched fresh on every invocation; implementations must not
/// cache across runs since the stored token may rotate.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Retrieve the bearer token stored under the given logical key
    async fn bearer_token(&self, key: &str) -> Result<SecretString, CredentialError>;
}

/// Error type for post source operations
#[derive(Debug, Error)]
pub enum PostSourceError {
    #[error("User '{0}' not found on the platform")]
    UserNotFound(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

/// Port for read-only platform queries: user resolution and post fetching.
///
/// Both calls are stateless single attempts; no pagination, no retries.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Map a username to the platform-internal user identifier
    async fn resolve_user(
        &self,
        token: &SecretString,
        username: &str,
    ) -> Result<String, PostSourceError>;

    /// Fetch the user's most recent original posts (replies and reposts
    /// excluded) with engagement metrics attached, most-recent-first
    async fn recent_posts(
        &self,
        token: &SecretString,
        user_id: &str,
    ) -> Result<Vec<SourcePost>, PostSourceError>;
}

/// Port for producing a short reaction comment for a post.
///
/// A pluggable capability with no failure modes: the canned random stub and a
/// future content-aware generator are interchangeable implementations.
#[async_trait]
pub trait CommentGenerator: Send + Sync {
    /// Produce a comment for the given post text
    async fn comment(&self, post_text: &str) -> String;
}

/// Error type for publisher operations
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Content too long: {len} > {max}")]
    ContentTooLong { len: usize, max: usize },
    #[error("API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Port for republishing a post as a quote with new commentary.
#[async_trait]
pub trait QuotePublisher: Send + Sync {
    /// Publish a new post quoting `quoted_post_id` with `text` as its body,
    /// returning the platform's confirmation
    async fn quote(
        &self,
        token: &SecretString,
        text: &str,
        quoted_post_id: &str,
    ) -> Result<PublishReceipt, PublishError>;
}
