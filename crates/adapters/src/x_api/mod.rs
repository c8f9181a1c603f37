//! X (Twitter) API adapters

mod read;
mod write;

pub use read::XPostSource;
pub use write::XQuotePublisher;

use async_trait::async_trait;
use requote_domain::{
    CredentialError, CredentialStore, PostSource, PostSourceError, PublishError, PublishReceipt,
    QuotePublisher, SourcePost,
};
use secrecy::SecretString;

/// Stub post source for testing
pub struct StubPostSource {
    user_id: String,
    posts: Vec<SourcePost>,
}

impl StubPostSource {
    /// Create an empty stub
    pub fn empty() -> Self {
        Self {
            user_id: "stub_user".to_string(),
            posts: vec![],
        }
    }

    /// Create a stub with predefined posts
    pub fn with_posts(posts: Vec<SourcePost>) -> Self {
        Self {
            user_id: "stub_user".to_string(),
            posts,
        }
    }
}

#[async_trait]
impl PostSource for StubPostSource {
    async fn resolve_user(
        &self,
        _token: &SecretString,
        _username: &str,
    ) -> Result<String, PostSourceError> {
        Ok(self.user_id.clone())
    }

    async fn recent_posts(
        &self,
        _token: &SecretString,
        _user_id: &str,
    ) -> Result<Vec<SourcePost>, PostSourceError> {
        Ok(self.posts.clone())
    }
}

/// Stub quote publisher for testing
pub struct StubQuotePublisher {
    published: std::sync::Mutex<Vec<(String, String)>>,
}

impl StubQuotePublisher {
    pub fn new() -> Self {
        Self {
            published: std::sync::Mutex::new(vec![]),
        }
    }

    /// Get all (text, quoted_post_id) pairs that were published
    pub fn get_published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

impl Default for StubQuotePublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuotePublisher for StubQuotePublisher {
    async fn quote(
        &self,
        _token: &SecretString,
        text: &str,
        quoted_post_id: &str,
    ) -> Result<PublishReceipt, PublishError> {
        self.published
            .lock()
            .unwrap()
            .push((text.to_string(), quoted_post_id.to_string()));

        let id = format!("stub_{}", quoted_post_id);
        Ok(PublishReceipt {
            post_id: Some(id.clone()),
            url: Some(format!("https://x.com/i/status/{}", id)),
            raw: serde_json::json!({"data": {"id": id}}),
        })
    }
}

/// Stub credential store for testing
pub struct StubCredentialStore {
    token: Option<String>,
}

impl StubCredentialStore {
    /// Create a stub that returns the given token for every key
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Create a stub that reports every key as missing
    pub fn missing() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl CredentialStore for StubCredentialStore {
    async fn bearer_token(&self, key: &str) -> Result<SecretString, CredentialError> {
        match self.token {
            Some(ref token) => Ok(SecretString::new(token.clone().into())),
            None => Err(CredentialError::NotFound(key.to_string())),
        }
    }
}
