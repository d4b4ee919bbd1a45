//! Third-party news API client

use async_trait::async_trait;

use crate::network::api::{query_pairs, ApiResult, NewsProvider, QueryParams};
use crate::network::client::parse_body;
use crate::network::error::ApiError;

/// News provider speaking the `/everything?q=...&apiKey=...` dialect
#[derive(Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        NewsClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl NewsProvider for NewsClient {
    async fn get_news(&self, params: &QueryParams) -> ApiResult {
        let url = format!("{}/everything", self.base_url);
        let mut pairs = query_pairs(params);
        if let Some(key) = &self.api_key {
            pairs.push(("apiKey".to_string(), key.clone()));
        }

        tracing::info!(url = %url, "Fetching news");
        let response = self.client.get(&url).query(&pairs).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_body(&text)
    }
}
