//! HTTP client for the betting REST API

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde_json::{json, Map, Value};

use crate::network::api::{query_pairs, ApiResult, MarketApi, QueryParams};
use crate::network::error::ApiError;

/// reqwest-backed [`MarketApi`]
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        HttpApi {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Append `segments` to the base URL, percent-encoding each one
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a request with optional bearer token, query and JSON body
    fn build_request(
        &self,
        method: Method,
        url: Url,
        token: Option<&str>,
        query: Option<&QueryParams>,
        body: Option<Value>,
    ) -> reqwest::RequestBuilder {
        let mut req_builder = self.client.request(method, url);

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            req_builder = req_builder.bearer_auth(token);
        }

        if let Some(params) = query {
            req_builder = req_builder.query(&query_pairs(params));
        }

        if let Some(body) = body {
            req_builder = req_builder.json(&body);
        }

        req_builder
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&str>,
        query: Option<&QueryParams>,
        body: Option<Value>,
    ) -> ApiResult {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        let start = Instant::now();
        let method_name = method.to_string();
        let response = self
            .build_request(method, url, token, query, body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let elapsed = start.elapsed().as_millis() as u64;
        tracing::debug!(method = %method_name, path = %path, status = status.as_u16(), elapsed, "API call finished");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_body(&text)
    }
}

/// Parse a response body; an empty body is `null`
pub fn parse_body(text: &str) -> ApiResult {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[async_trait]
impl MarketApi for HttpApi {
    async fn list_events(&self) -> ApiResult {
        self.send(Method::GET, &["event", "list"], None, None, None).await
    }

    async fn list_events_filtered(&self, token: Option<&str>, params: &QueryParams) -> ApiResult {
        self.send(Method::GET, &["event", "list", "filtered"], token, Some(params), None)
            .await
    }

    async fn get_tags(&self) -> ApiResult {
        self.send(Method::GET, &["event", "tags"], None, None, None).await
    }

    async fn get_event_history_chart_data(
        &self,
        token: Option<&str>,
        bet_id: &str,
        params: &QueryParams,
    ) -> ApiResult {
        self.send(Method::GET, &["bet", bet_id, "history"], token, Some(params), None).await
    }

    async fn delete_event(&self, token: Option<&str>, event_id: &str) -> ApiResult {
        self.send(Method::DELETE, &["event", event_id], token, None, None).await
    }

    async fn get_user(&self, user_id: &str) -> ApiResult {
        self.send(Method::GET, &["user", user_id], None, None, None).await
    }

    async fn create_bet(&self, token: Option<&str>, bet: &Map<String, Value>) -> ApiResult {
        self.send(Method::POST, &["bet", "create"], token, None, Some(Value::Object(bet.clone())))
            .await
    }

    async fn place_bet(
        &self,
        token: Option<&str>,
        bet_id: &str,
        amount: &Value,
        outcome: &Value,
    ) -> ApiResult {
        let body = json!({ "amount": amount, "outcome": outcome });
        self.send(Method::POST, &["bet", bet_id, "place"], token, None, Some(body)).await
    }

    async fn pull_out_bet(
        &self,
        token: Option<&str>,
        bet_id: &str,
        amount: &Value,
        outcome: &Value,
    ) -> ApiResult {
        let body = json!({ "amount": amount, "outcome": outcome });
        self.send(Method::POST, &["bet", bet_id, "pullout"], token, None, Some(body)).await
    }

    async fn get_outcomes(&self, bet_id: &str, amount: &Value) -> ApiResult {
        let body = json!({ "amount": amount });
        self.send(Method::POST, &["bet", bet_id, "outcomes", "buy"], None, None, Some(body)).await
    }

    async fn get_sell_outcomes(&self, token: Option<&str>, bet_id: &str, amount: &Value) -> ApiResult {
        let body = json!({ "amount": amount });
        self.send(Method::POST, &["bet", bet_id, "outcomes", "sell"], token, None, Some(body)).await
    }

    async fn list_open_bets(&self, token: Option<&str>) -> ApiResult {
        self.send(Method::GET, &["bet", "open"], token, None, None).await
    }

    async fn get_trade_history(&self, token: Option<&str>) -> ApiResult {
        self.send(Method::GET, &["trades"], token, None, None).await
    }
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout_secs: u64) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
