//! Client seam for the opaque search collaborators.
//!
//! The `/search` and `/chat-search` endpoints are external; this module only
//! ships the request payloads and deserializes the response envelope.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::SearchResponse;
use crate::utils::http::{create_client, post_json_with_retry};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Search form fields as the front end submits them. Absent filters are
/// omitted from the payload; the backend applies its own defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchParams {
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_shipping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<String>,
}

impl SearchParams {
    pub fn for_product(product: &str) -> Self {
        Self {
            product: product.to_string(),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Plain two-source search.
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse>;
    /// Conversational search; the backend extracts filters from the message.
    async fn chat_search(&self, message: &str) -> Result<SearchResponse>;
}

pub struct HttpSearchClient {
    client: Client,
    config: Arc<Config>,
}

impl HttpSearchClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_client(&config.user_agent, config.timeout_secs)?;
        Ok(Self { client, config })
    }

    async fn post_envelope<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<SearchResponse> {
        let url = format!("{}{}", self.config.base_url, path);
        let response =
            post_json_with_retry(&self.client, &url, body, self.config.max_retries).await?;
        let envelope: SearchResponse = response.json().await?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "Search failed".to_string());
            return Err(Error::Endpoint(message));
        }

        Ok(envelope)
    }
}

#[async_trait]
impl SearchApi for HttpSearchClient {
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        info!("Searching for: {}", params.product);
        self.post_envelope("/search", params).await
    }

    async fn chat_search(&self, message: &str) -> Result<SearchResponse> {
        info!("Chat search: {}", message);
        self.post_envelope("/chat-search", &json!({ "message": message }))
            .await
    }
}

/// NewType for one issued request's position in the session order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic token issuer so callers can discard out-of-order responses:
/// a response is only rendered when its token is still the latest issued.
#[derive(Debug, Default)]
pub struct SearchSession {
    counter: AtomicU64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestToken {
        RequestToken(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.counter.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpSearchClient {
        let config = Arc::new(Config::with_base_url(&server.uri()).unwrap());
        HttpSearchClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn search_posts_params_and_parses_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({"product": "lego star wars"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "ebay": {"items": [{"title": "Lego Set", "price": "19.99"}], "count": 1},
                "amazon": {"items": [{"product_title": "Lego Set", "product_price": 18.49}], "count": 1}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .search(&SearchParams::for_product("lego star wars"))
            .await
            .unwrap();

        let items = response.raw_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source(), Source::Ebay);
    }

    #[tokio::test]
    async fn failure_envelope_becomes_endpoint_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": "upstream quota exceeded"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .search(&SearchParams::for_product("lego"))
            .await
            .unwrap_err();
        match err {
            Error::Endpoint(message) => assert_eq!(message, "upstream quota exceeded"),
            other => panic!("expected endpoint error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn chat_search_posts_message_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat-search"))
            .and(body_partial_json(
                json!({"message": "a lego set under $50"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "products": [{"source": "Amazon", "product_title": "Lego Set", "product_type": "main"}],
                "extracted": {"product": "lego set", "max_price": "50"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.chat_search("a lego set under $50").await.unwrap();
        assert_eq!(response.raw_items().len(), 1);
        assert!(response.extracted.is_some());
    }

    #[test]
    fn stale_tokens_are_not_current() {
        let session = SearchSession::new();
        let first = session.begin();
        assert!(session.is_current(first));

        let second = session.begin();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }
}
