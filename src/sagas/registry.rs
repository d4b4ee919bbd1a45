//! Coordinator registry - at most one coordinator per triggering action type

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use thiserror::Error;

use crate::messages::{Action, BetTypes, EventTypes, UserTypes};
use crate::sagas::context::SagaContext;
use crate::sagas::outcome::SagaOutcome;
use crate::sagas::{bet, event, user};

#[derive(Debug, Error, PartialEq)]
pub enum SagaError {
    #[error("a coordinator is already registered for {0}")]
    DuplicateTrigger(&'static str),
}

type Handler = Arc<dyn Fn(SagaContext, Action) -> BoxFuture<'static, SagaOutcome> + Send + Sync>;

#[derive(Default, Clone)]
pub struct Registry {
    handlers: HashMap<&'static str, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every coordinator the application runs
    pub fn standard() -> Result<Self, SagaError> {
        let mut registry = Registry::new();

        registry.register(EventTypes::FETCH_ALL, event::fetch_all)?;
        registry.register(EventTypes::FETCH_ALL_SUCCEEDED, event::fetch_all_succeeded)?;
        registry.register(EventTypes::FETCH_FILTERED, event::fetch_filtered_events)?;
        registry.register(EventTypes::FETCH_HOME_EVENTS, event::fetch_home_events)?;
        registry.register(EventTypes::FETCH_TAGS, event::fetch_tags)?;
        registry.register(EventTypes::FETCH_CHART_DATA, event::fetch_history_chart_data)?;
        registry.register(EventTypes::FETCH_NEWS_DATA, event::fetch_news_data)?;
        registry.register(EventTypes::DELETE_EVENT, event::delete_event)?;

        registry.register(UserTypes::FETCH, user::fetch)?;

        registry.register(BetTypes::CREATE, bet::create)?;
        registry.register(BetTypes::PLACE, bet::place)?;
        registry.register(BetTypes::PULL_OUT_BET, bet::pull_out_bet)?;
        registry.register(BetTypes::FETCH_OUTCOMES, bet::fetch_outcomes)?;
        registry.register(BetTypes::FETCH_SELL_OUTCOMES, bet::fetch_sell_outcomes)?;
        registry.register(BetTypes::FETCH_OPEN_BETS, bet::fetch_open_bets)?;
        registry.register(BetTypes::FETCH_TRADE_HISTORY, bet::fetch_trade_history)?;

        Ok(registry)
    }

    pub fn register<F, Fut>(&mut self, trigger: &'static str, saga: F) -> Result<(), SagaError>
    where
        F: Fn(SagaContext, Action) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = SagaOutcome> + Send + 'static,
    {
        if self.handlers.contains_key(trigger) {
            return Err(SagaError::DuplicateTrigger(trigger));
        }
        let handler: Handler = Arc::new(move |ctx, action| saga(ctx, action).boxed());
        self.handlers.insert(trigger, handler);
        Ok(())
    }

    /// Build the coordinator future for `action`, if one is registered
    pub fn start(&self, ctx: SagaContext, action: Action) -> Option<BoxFuture<'static, SagaOutcome>> {
        let handler = self.handlers.get(action.kind())?;
        Some(handler(ctx, action))
    }

    pub fn handles(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::WORKFLOWS;

    async fn noop(_ctx: SagaContext, _action: Action) -> SagaOutcome {
        SagaOutcome::Succeeded
    }

    #[test]
    fn test_duplicate_trigger_rejected() {
        let mut registry = Registry::new();
        registry.register("Test/PING", noop).unwrap();
        assert_eq!(
            registry.register("Test/PING", noop),
            Err(SagaError::DuplicateTrigger("Test/PING"))
        );
    }

    #[test]
    fn test_standard_registry_covers_every_workflow() {
        let registry = Registry::standard().unwrap();
        for w in WORKFLOWS {
            assert!(registry.handles(w.trigger), "no coordinator for {}", w.trigger);
        }
        assert!(registry.handles(EventTypes::FETCH_ALL_SUCCEEDED));
        assert_eq!(registry.len(), WORKFLOWS.len() + 1);
    }
}
