//! X API read adapter: user resolution and recent-post fetching

use async_trait::async_trait;
use requote_domain::{EngagementMetrics, PostSource, PostSourceError, SourcePost};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

/// Maximum posts requested per fetch. The platform returns them
/// most-recent-first; selection ties therefore favor recency.
const MAX_RESULTS: u8 = 15;

/// X API post source for resolving users and reading timelines.
///
/// Holds no token: the bearer token is passed per call, since the pipeline
/// fetches it fresh on every invocation.
pub struct XPostSource {
    client: Client,
    base_url: String,
}

impl XPostSource {
    pub fn new() -> Self {
        Self::with_base_url("https://api.twitter.com".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }
}

impl Default for XPostSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct UserResponse {
    data: Option<UserData>,
}

#[derive(Deserialize)]
struct UserData {
    id: String,
}

#[derive(Deserialize)]
struct TweetsResponse {
    data: Option<Vec<Tweet>>,
}

#[derive(Deserialize)]
struct Tweet {
    id: String,
    #[serde(default)]
    author_id: Option<String>,
    text: String,
    public_metrics: Option<PublicMetrics>,
}

#[derive(Deserialize)]
struct PublicMetrics {
    like_count: u64,
    retweet_count: u64,
    quote_count: u64,
    reply_count: u64,
}

#[async_trait]
impl PostSource for XPostSource {
    async fn resolve_user(
        &self,
        token: &SecretString,
        username: &str,
    ) -> Result<String, PostSourceError> {
        let url = format!("{}/2/users/by/username/{}", self.base_url, username);

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            )
            .send()
            .await
            .map_err(|e| PostSourceError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(PostSourceError::Auth("Invalid bearer token".to_string()));
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PostSourceError::Api(format!(
                "Failed to look up user: {}",
                body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PostSourceError::Network(e.to_string()))?;

        let user_response: UserResponse = serde_json::from_str(&body)
            .map_err(|e| PostSourceError::MalformedResponse(e.to_string()))?;

        // No `data` field means the platform reported no match
        match user_response.data {
            Some(user) => Ok(user.id),
            None => Err(PostSourceError::UserNotFound(username.to_string())),
        }
    }

    async fn recent_posts(
        &self,
        token: &SecretString,
        user_id: &str,
    ) -> Result<Vec<SourcePost>, PostSourceError> {
        let url = format!(
            "{}/2/users/{}/tweets?exclude=retweets,replies&max_results={}&tweet.fields=public_metrics",
            self.base_url, user_id, MAX_RESULTS
        );

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            )
            .send()
            .await
            .map_err(|e| PostSourceError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(PostSourceError::Auth("Invalid bearer token".to_string()));
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PostSourceError::Api(format!(
                "Failed to fetch posts: {}",
                body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PostSourceError::Network(e.to_string()))?;

        let tweets_response: TweetsResponse = serde_json::from_str(&body)
            .map_err(|e| PostSourceError::MalformedResponse(e.to_string()))?;

        let tweets = tweets_response.data.unwrap_or_default();

        tracing::debug!(user_id = %user_id, count = tweets.len(), "Fetched posts from X");

        tweets
            .into_iter()
            .map(|tweet| {
                // Absent metrics are an error, never a silent zero
                let metrics = tweet.public_metrics.ok_or_else(|| {
                    PostSourceError::MalformedResponse(format!(
                        "post {} is missing public_metrics",
                        tweet.id
                    ))
                })?;

                Ok(SourcePost {
                    id: tweet.id,
                    author_id: tweet.author_id.unwrap_or_else(|| user_id.to_string()),
                    text: tweet.text,
                    metrics: EngagementMetrics {
                        likes: metrics.like_count,
                        reposts: metrics.retweet_count,
                        quotes: metrics.quote_count,
                        replies: metrics.reply_count,
                    },
                })
            })
            .collect()
    }
}
