//! X API write adapter: publishing quote posts

use async_trait::async_trait;
use requote_domain::{PublishError, PublishReceipt, QuotePublisher};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

/// X API publisher that quotes an existing post with new commentary.
pub struct XQuotePublisher {
    client: Client,
    base_url: String,
    max_chars: usize,
}

impl XQuotePublisher {
    pub fn new(max_chars: usize) -> Self {
        Self::with_base_url("https://api.twitter.com".to_string(), max_chars)
    }

    pub fn with_base_url(base_url: String, max_chars: usize) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            max_chars,
        }
    }
}

#[derive(Serialize)]
struct CreateQuoteRequest<'a> {
    text: &'a str,
    quote_tweet_id: &'a str,
}

#[async_trait]
impl QuotePublisher for XQuotePublisher {
    async fn quote(
        &self,
        token: &SecretString,
        text: &str,
        quoted_post_id: &str,
    ) -> Result<PublishReceipt, PublishError> {
        // Platform length limit, checked before the request is sent
        if text.len() > self.max_chars {
            return Err(PublishError::ContentTooLong {
                len: text.len(),
                max: self.max_chars,
            });
        }

        let url = format!("{}/2/tweets", self.base_url);

        let request = CreateQuoteRequest {
            text,
            quote_tweet_id: quoted_post_id,
        };

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(PublishError::Auth("Invalid bearer token".to_string()));
        }

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Api(format!(
                "Failed to create quote post: {}",
                body
            )));
        }

        // The confirmation body is passed through opaquely; the new post id
        // is extracted when present so callers get a usable URL
        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PublishError::Api(e.to_string()))?;

        let post_id = raw
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(|id| id.as_str())
            .map(String::from);

        let url = post_id
            .as_ref()
            .map(|id| format!("https://x.com/i/status/{}", id));

        Ok(PublishReceipt { post_id, url, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token() -> SecretString {
        SecretString::new("test-token".into())
    }

    #[tokio::test]
    async fn test_quote_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({
                "text": "Must read",
                "quote_tweet_id": "original_id"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {
                    "id": "new_id",
                    "text": "Must read"
                }
            })))
            .mount(&mock_server)
            .await;

        let publisher = XQuotePublisher::with_base_url(mock_server.uri(), 280);

        let receipt = publisher
            .quote(&token(), "Must read", "original_id")
            .await
            .unwrap();

        assert_eq!(receipt.post_id.as_deref(), Some("new_id"));
        assert_eq!(receipt.url.as_deref(), Some("https://x.com/i/status/new_id"));
        assert_eq!(receipt.raw["data"]["id"], "new_id");
    }

    #[tokio::test]
    async fn test_quote_passes_raw_confirmation_through() {
        let mock_server = MockServer::start().await;

        // Confirmation without the expected shape: still a success, raw kept
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "something": "else"
            })))
            .mount(&mock_server)
            .await;

        let publisher = XQuotePublisher::with_base_url(mock_server.uri(), 280);

        let receipt = publisher.quote(&token(), "hi", "original_id").await.unwrap();

        assert!(receipt.post_id.is_none());
        assert!(receipt.url.is_none());
        assert_eq!(receipt.raw["something"], "else");
    }

    #[tokio::test]
    async fn test_quote_content_too_long() {
        let publisher =
            XQuotePublisher::with_base_url("https://api.twitter.com".to_string(), 10);

        let result = publisher
            .quote(&token(), "this text is longer than ten chars", "original_id")
            .await;

        assert!(matches!(
            result,
            Err(PublishError::ContentTooLong { len: 34, max: 10 })
        ));
    }

    #[tokio::test]
    async fn test_quote_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let publisher = XQuotePublisher::with_base_url(mock_server.uri(), 280);

        let result = publisher.quote(&token(), "hi", "original_id").await;
        assert!(matches!(result, Err(PublishError::Auth(_))));
    }

    #[tokio::test]
    async fn test_quote_rejection_is_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "title": "Forbidden"
            })))
            .mount(&mock_server)
            .await;

        let publisher = XQuotePublisher::with_base_url(mock_server.uri(), 280);

        let result = publisher.quote(&token(), "hi", "original_id").await;
        assert!(matches!(result, Err(PublishError::Api(_))));
    }
}
