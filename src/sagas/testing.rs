//! In-memory API fakes and a harness for driving coordinators in tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tokio::sync::{mpsc, watch};

use crate::app::AppState;
use crate::config::EmptyResponsePolicy;
use crate::messages::Action;
use crate::network::{ApiError, ApiResult, MarketApi, NewsProvider, QueryParams};
use crate::sagas::context::SagaContext;

/// One recorded call on the fake
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub token: Option<String>,
    pub args: Value,
}

/// Canned responses keyed by method name; unconfigured methods fail
#[derive(Default)]
pub struct FakeApi {
    responses: HashMap<&'static str, ApiResult>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: &'static str, result: ApiResult) -> Self {
        self.responses.insert(method, result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, method: &'static str, token: Option<&str>, args: Value) -> ApiResult {
        self.calls.lock().unwrap().push(Call {
            method,
            token: token.map(str::to_string),
            args,
        });
        self.responses
            .get(method)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no response for {}", method))))
    }
}

#[async_trait]
impl MarketApi for FakeApi {
    async fn list_events(&self) -> ApiResult {
        self.answer("list_events", None, Value::Null)
    }

    async fn list_events_filtered(&self, token: Option<&str>, params: &QueryParams) -> ApiResult {
        self.answer("list_events_filtered", token, Value::Object(params.clone()))
    }

    async fn get_tags(&self) -> ApiResult {
        self.answer("get_tags", None, Value::Null)
    }

    async fn get_event_history_chart_data(
        &self,
        token: Option<&str>,
        bet_id: &str,
        params: &QueryParams,
    ) -> ApiResult {
        self.answer(
            "get_event_history_chart_data",
            token,
            json!({ "betId": bet_id, "params": params }),
        )
    }

    async fn delete_event(&self, token: Option<&str>, event_id: &str) -> ApiResult {
        self.answer("delete_event", token, json!(event_id))
    }

    async fn get_user(&self, user_id: &str) -> ApiResult {
        self.answer("get_user", None, json!(user_id))
    }

    async fn create_bet(&self, token: Option<&str>, bet: &Map<String, Value>) -> ApiResult {
        self.answer("create_bet", token, Value::Object(bet.clone()))
    }

    async fn place_bet(
        &self,
        token: Option<&str>,
        bet_id: &str,
        amount: &Value,
        outcome: &Value,
    ) -> ApiResult {
        self.answer(
            "place_bet",
            token,
            json!({ "betId": bet_id, "amount": amount, "outcome": outcome }),
        )
    }

    async fn pull_out_bet(
        &self,
        token: Option<&str>,
        bet_id: &str,
        amount: &Value,
        outcome: &Value,
    ) -> ApiResult {
        self.answer(
            "pull_out_bet",
            token,
            json!({ "betId": bet_id, "amount": amount, "outcome": outcome }),
        )
    }

    async fn get_outcomes(&self, bet_id: &str, amount: &Value) -> ApiResult {
        self.answer("get_outcomes", None, json!({ "betId": bet_id, "amount": amount }))
    }

    async fn get_sell_outcomes(&self, token: Option<&str>, bet_id: &str, amount: &Value) -> ApiResult {
        self.answer("get_sell_outcomes", token, json!({ "betId": bet_id, "amount": amount }))
    }

    async fn list_open_bets(&self, token: Option<&str>) -> ApiResult {
        self.answer("list_open_bets", token, Value::Null)
    }

    async fn get_trade_history(&self, token: Option<&str>) -> ApiResult {
        self.answer("get_trade_history", token, Value::Null)
    }
}

#[async_trait]
impl NewsProvider for FakeApi {
    async fn get_news(&self, params: &QueryParams) -> ApiResult {
        self.answer("get_news", None, Value::Object(params.clone()))
    }
}

/// A coordinator context over `state` and `api`, plus the receiving end of its
/// dispatch channel
pub struct Harness {
    pub ctx: SagaContext,
    pub api: Arc<FakeApi>,
    pub state_tx: watch::Sender<Arc<AppState>>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl Harness {
    pub fn new(state: AppState, api: FakeApi) -> Self {
        Self::with_policy(state, api, EmptyResponsePolicy::Succeed)
    }

    pub fn with_policy(state: AppState, api: FakeApi, policy: EmptyResponsePolicy) -> Self {
        let api = Arc::new(api);
        let (state_tx, state_rx) = watch::channel(Arc::new(state));
        let (tx, rx) = mpsc::unbounded_channel();
        let ctx = SagaContext::new(api.clone(), api.clone(), state_rx, tx, policy);
        Harness { ctx, api, state_tx, rx }
    }

    /// Everything emitted so far
    pub fn emitted(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            out.push(action);
        }
        out
    }
}

pub fn kinds(actions: &[Action]) -> Vec<&'static str> {
    actions.iter().map(Action::kind).collect()
}
