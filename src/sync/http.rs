//! HTTP remote
//!
//! JSON-over-HTTP client for the mock posts endpoint. GET lists posts whose
//! `title` becomes the quote text; POST sends one `{text, category}` body.

use crate::sync::{RemoteSource, SyncError};
use crate::types::{Quote, DEFAULT_REMOTE_CATEGORY};
use async_trait::async_trait;
use std::time::Duration;

const USER_AGENT: &str = concat!("QuoteBox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, serde::Deserialize)]
struct RemotePost {
    #[serde(default)]
    title: Option<String>,
}

impl HttpRemote {
    pub fn new(url: impl Into<String>) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Map remote posts to quotes, skipping posts without a usable title
fn posts_to_quotes(posts: Vec<RemotePost>) -> Vec<Quote> {
    posts
        .into_iter()
        .filter_map(|post| post.title)
        .filter(|title| !title.trim().is_empty())
        .map(|title| Quote::new(title, DEFAULT_REMOTE_CATEGORY))
        .collect()
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }

        let body = response.text().await?;
        let posts: Vec<RemotePost> =
            serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))?;

        tracing::debug!("Fetched {} posts from {}", posts.len(), self.url);
        Ok(posts_to_quotes(posts))
    }

    async fn publish_quote(&self, quote: &Quote) -> Result<(), SyncError> {
        let response = self.client.post(&self.url).json(quote).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_maps_titles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "..."},
                {"userId": 1, "id": 2, "body": "no title"},
                {"userId": 1, "id": 3, "title": "  "},
                {"userId": 1, "id": 4, "title": "qui est esse"}
            ])))
            .mount(&server)
            .await;

        let remote = HttpRemote::new(format!("{}/posts", server.uri())).unwrap();
        let quotes = remote.fetch_quotes().await.unwrap();

        assert_eq!(
            quotes,
            vec![
                Quote::new("sunt aut facere", "General"),
                Quote::new("qui est esse", "General"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let remote = HttpRemote::new(server.uri()).unwrap();
        let err = remote.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, SyncError::Status(status) if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "x"})))
            .mount(&server)
            .await;

        let remote = HttpRemote::new(server.uri()).unwrap();
        assert!(matches!(
            remote.fetch_quotes().await,
            Err(SyncError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_publish_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(json!({"text": "Keep going", "category": "General"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
            .expect(1)
            .mount(&server)
            .await;

        let remote = HttpRemote::new(format!("{}/posts", server.uri())).unwrap();
        remote
            .publish_quote(&Quote::new("Keep going", "General"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let server = MockServer::start().await;
        let url = format!("{}/posts", server.uri());
        drop(server);

        let remote = HttpRemote::new(url).unwrap();
        assert!(matches!(
            remote.fetch_quotes().await,
            Err(SyncError::Network(_))
        ));
    }
}
