//! Effect results → success or failure

use serde_json::Value;

use crate::config::EmptyResponsePolicy;
use crate::network::ApiResult;

/// Terminal state of one coordinator invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SagaOutcome {
    Succeeded,
    Failed,
}

/// True for `[]` and `{}`
pub fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Classify an effect result.
///
/// Errors and `null` bodies fail. Empty collections follow `policy`.
/// Everything else is the data to carry in the success message.
pub fn settle(result: ApiResult, policy: EmptyResponsePolicy, workflow: &'static str) -> Option<Value> {
    match result {
        Err(e) => {
            tracing::warn!(workflow, error = %e, "Effect failed");
            None
        }
        Ok(Value::Null) => {
            tracing::warn!(workflow, "Effect returned no data");
            None
        }
        Ok(data) if policy == EmptyResponsePolicy::Fail && is_empty_collection(&data) => {
            tracing::warn!(workflow, "Effect returned an empty collection");
            None
        }
        Ok(data) => Some(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ApiError;
    use serde_json::json;

    #[test]
    fn test_errors_and_null_always_fail() {
        for policy in [EmptyResponsePolicy::Succeed, EmptyResponsePolicy::Fail] {
            assert_eq!(settle(Err(ApiError::Timeout), policy, "test"), None);
            assert_eq!(settle(Ok(Value::Null), policy, "test"), None);
        }
    }

    #[test]
    fn test_empty_collection_follows_policy() {
        assert_eq!(settle(Ok(json!([])), EmptyResponsePolicy::Succeed, "test"), Some(json!([])));
        assert_eq!(settle(Ok(json!({})), EmptyResponsePolicy::Succeed, "test"), Some(json!({})));
        assert_eq!(settle(Ok(json!([])), EmptyResponsePolicy::Fail, "test"), None);
        assert_eq!(settle(Ok(json!({})), EmptyResponsePolicy::Fail, "test"), None);
    }

    #[test]
    fn test_data_passes_through() {
        let data = json!([{ "_id": "e1" }]);
        assert_eq!(settle(Ok(data.clone()), EmptyResponsePolicy::Fail, "test"), Some(data));
        assert_eq!(settle(Ok(json!(0)), EmptyResponsePolicy::Fail, "test"), Some(json!(0)));
    }
}
