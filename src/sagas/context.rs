//! Per-invocation handle given to each coordinator

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, watch};

use crate::app::AppState;
use crate::config::EmptyResponsePolicy;
use crate::messages::Action;
use crate::network::{ApiResult, MarketApi, NewsProvider};
use crate::sagas::outcome::settle;

/// What a coordinator can touch: read-only state, the external clients and the
/// dispatch channel. State is never written directly.
#[derive(Clone)]
pub struct SagaContext {
    api: Arc<dyn MarketApi>,
    news: Arc<dyn NewsProvider>,
    state: watch::Receiver<Arc<AppState>>,
    dispatch: mpsc::UnboundedSender<Action>,
    policy: EmptyResponsePolicy,
}

impl SagaContext {
    pub fn new(
        api: Arc<dyn MarketApi>,
        news: Arc<dyn NewsProvider>,
        state: watch::Receiver<Arc<AppState>>,
        dispatch: mpsc::UnboundedSender<Action>,
        policy: EmptyResponsePolicy,
    ) -> Self {
        SagaContext {
            api,
            news,
            state,
            dispatch,
            policy,
        }
    }

    pub fn api(&self) -> &dyn MarketApi {
        self.api.as_ref()
    }

    pub fn news(&self) -> &dyn NewsProvider {
        self.news.as_ref()
    }

    /// Read from the latest committed state
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        let snapshot = self.state.borrow();
        selector(&snapshot)
    }

    /// Authentication token, passed explicitly into authenticated calls
    pub fn token(&self) -> Option<String> {
        self.select(|s| s.authentication.token.clone())
    }

    /// Emit a follow-up action
    pub fn put(&self, action: Action) {
        tracing::debug!(kind = action.kind(), "put");
        if self.dispatch.send(action).is_err() {
            tracing::debug!("Store closed, action dropped");
        }
    }

    /// Emit a batch of actions whose relative order carries no meaning
    pub fn put_all(&self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.put(action);
        }
    }

    pub fn settle(&self, result: ApiResult, workflow: &'static str) -> Option<Value> {
        settle(result, self.policy, workflow)
    }
}
