//! External collaborators of the sagas: the betting REST API and the news provider.
//!
//! Calls return the response body (`data`) as JSON. A body that is empty or `null`
//! comes back as `Value::Null`. Authenticated calls take the token as an argument;
//! there is no ambient client configuration.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::network::error::ApiError;

/// Query parameters for listing endpoints
pub type QueryParams = Map<String, Value>;

pub type ApiResult = Result<Value, ApiError>;

#[async_trait]
pub trait MarketApi: Send + Sync {
    async fn list_events(&self) -> ApiResult;

    async fn list_events_filtered(&self, token: Option<&str>, params: &QueryParams) -> ApiResult;

    async fn get_tags(&self) -> ApiResult;

    async fn get_event_history_chart_data(
        &self,
        token: Option<&str>,
        bet_id: &str,
        params: &QueryParams,
    ) -> ApiResult;

    async fn delete_event(&self, token: Option<&str>, event_id: &str) -> ApiResult;

    async fn get_user(&self, user_id: &str) -> ApiResult;

    async fn create_bet(&self, token: Option<&str>, bet: &Map<String, Value>) -> ApiResult;

    async fn place_bet(
        &self,
        token: Option<&str>,
        bet_id: &str,
        amount: &Value,
        outcome: &Value,
    ) -> ApiResult;

    async fn pull_out_bet(
        &self,
        token: Option<&str>,
        bet_id: &str,
        amount: &Value,
        outcome: &Value,
    ) -> ApiResult;

    async fn get_outcomes(&self, bet_id: &str, amount: &Value) -> ApiResult;

    async fn get_sell_outcomes(&self, token: Option<&str>, bet_id: &str, amount: &Value) -> ApiResult;

    async fn list_open_bets(&self, token: Option<&str>) -> ApiResult;

    async fn get_trade_history(&self, token: Option<&str>) -> ApiResult;
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn get_news(&self, params: &QueryParams) -> ApiResult;
}

/// Flatten query parameters into string pairs. `null` values are dropped and
/// arrays are joined with commas.
pub fn query_pairs(params: &QueryParams) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                other => other.to_string(),
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_skip_null() {
        let params = json!({ "category": "all", "page": 2, "upcoming": null, "tags": ["a", "b"] });
        let Value::Object(params) = params else { unreachable!() };
        let mut pairs = query_pairs(&params);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("category".to_string(), "all".to_string()),
                ("page".to_string(), "2".to_string()),
                ("tags".to_string(), "a,b".to_string()),
            ]
        );
    }
}
