//! Bet workflows: creating, trading and the user's positions

use serde_json::{json, Value};

use crate::messages::{Action, BetActions, BetTypes, EventActions, Payload};
use crate::network::ApiError;
use crate::sagas::context::SagaContext;
use crate::sagas::outcome::SagaOutcome;

fn bet_id(action: &Action) -> Result<String, ApiError> {
    action
        .str_field("betId")
        .map(str::to_string)
        .ok_or(ApiError::MissingParameter("betId"))
}

pub async fn create(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let bet: Payload = action.payload().clone();
    let result = ctx.api().create_bet(token.as_deref(), &bet).await;

    match ctx.settle(result, BetTypes::CREATE) {
        Some(bet) => {
            ctx.put(BetActions::CREATE_SUCCEEDED.create(json!({ "bet": bet })));
            ctx.put(EventActions::FETCH_ALL.empty());
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(BetActions::CREATE_FAILED.empty());
            SagaOutcome::Failed
        }
    }
}

pub async fn place(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let amount = action.value("amount");
    let outcome = action.value("outcome");
    let result = match bet_id(&action) {
        Ok(id) => ctx.api().place_bet(token.as_deref(), &id, &amount, &outcome).await,
        Err(e) => Err(e),
    };

    match ctx.settle(result, BetTypes::PLACE) {
        Some(_) => {
            ctx.put(BetActions::PLACE_SUCCEEDED.create(json!({
                "betId": action.value("betId"),
                "amount": amount,
                "outcome": outcome,
            })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(BetActions::PLACE_FAILED.empty());
            SagaOutcome::Failed
        }
    }
}

pub async fn pull_out_bet(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let amount = action.value("amount");
    let outcome = action.value("outcome");
    let result = match bet_id(&action) {
        Ok(id) => ctx.api().pull_out_bet(token.as_deref(), &id, &amount, &outcome).await,
        Err(e) => Err(e),
    };

    match ctx.settle(result, BetTypes::PULL_OUT_BET) {
        Some(_) => {
            ctx.put(BetActions::PULL_OUT_BET_SUCCEEDED.empty());
            ctx.put(BetActions::FETCH_OPEN_BETS.empty());
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(BetActions::PULL_OUT_BET_FAILED.empty());
            SagaOutcome::Failed
        }
    }
}

/// Buy-side outcome prices. No failure message exists for this workflow.
pub async fn fetch_outcomes(ctx: SagaContext, action: Action) -> SagaOutcome {
    let amount = action.value("amount");
    let result = match bet_id(&action) {
        Ok(id) => ctx.api().get_outcomes(&id, &amount).await,
        Err(e) => Err(e),
    };

    match ctx.settle(result, BetTypes::FETCH_OUTCOMES) {
        Some(outcomes) => {
            ctx.put(BetActions::SET_OUTCOMES.create(json!({ "outcomes": outcomes })));
            SagaOutcome::Succeeded
        }
        None => SagaOutcome::Failed,
    }
}

pub async fn fetch_sell_outcomes(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let amount = action.value("amount");
    let result = match bet_id(&action) {
        Ok(id) => ctx.api().get_sell_outcomes(token.as_deref(), &id, &amount).await,
        Err(e) => Err(e),
    };

    match ctx.settle(result, BetTypes::FETCH_SELL_OUTCOMES) {
        Some(outcomes) => {
            ctx.put(BetActions::SET_SELL_OUTCOMES.create(json!({ "sellOutcomes": outcomes })));
            SagaOutcome::Succeeded
        }
        None => SagaOutcome::Failed,
    }
}

pub async fn fetch_open_bets(ctx: SagaContext, _action: Action) -> SagaOutcome {
    let token = ctx.token();
    let result = ctx.api().list_open_bets(token.as_deref()).await;

    match ctx.settle(result, BetTypes::FETCH_OPEN_BETS) {
        Some(open_bets) => {
            ctx.put(BetActions::FETCH_OPEN_BETS_SUCCEEDED.create(json!({ "openBets": open_bets })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(BetActions::FETCH_OPEN_BETS_FAILED.empty());
            SagaOutcome::Failed
        }
    }
}

pub async fn fetch_trade_history(ctx: SagaContext, _action: Action) -> SagaOutcome {
    let token = ctx.token();
    let result = ctx.api().get_trade_history(token.as_deref()).await;

    match ctx.settle(result, BetTypes::FETCH_TRADE_HISTORY) {
        Some(body) => {
            let trades = match body {
                Value::Object(mut map) => map.remove("trades").unwrap_or(Value::Null),
                list => list,
            };
            ctx.put(BetActions::FETCH_TRADE_HISTORY_SUCCESS.create(json!({ "trades": trades })));
            SagaOutcome::Succeeded
        }
        None => SagaOutcome::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::messages::EventTypes;
    use crate::sagas::testing::{kinds, FakeApi, Harness};

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state.authentication.token = Some("tok".into());
        state
    }

    #[tokio::test]
    async fn test_create_sends_defaults_and_refreshes_events() {
        let mut h = Harness::new(signed_in(), FakeApi::new().respond("create_bet", Ok(json!({ "_id": "b1" }))));

        let action = BetActions::CREATE.create(json!({ "eventId": "e1", "marketQuestion": "Who wins?" }));
        create(h.ctx.clone(), action).await;

        let calls = h.api.calls();
        assert_eq!(calls[0].token.as_deref(), Some("tok"));
        assert_eq!(calls[0].args["liquidityAmount"], json!(1));
        assert_eq!(
            kinds(&h.emitted()),
            vec![BetTypes::CREATE_SUCCEEDED, EventTypes::FETCH_ALL]
        );
    }

    #[tokio::test]
    async fn test_place_echoes_request_on_success() {
        let mut h = Harness::new(signed_in(), FakeApi::new().respond("place_bet", Ok(json!({ "ok": true }))));

        let action = BetActions::PLACE.create(json!({ "betId": "b1", "amount": 10, "outcome": 0 }));
        place(h.ctx.clone(), action).await;

        let emitted = h.emitted();
        assert_eq!(kinds(&emitted), vec![BetTypes::PLACE_SUCCEEDED]);
        assert_eq!(emitted[0].get("amount"), Some(&json!(10)));
        assert_eq!(emitted[0].str_field("betId"), Some("b1"));
    }

    #[tokio::test]
    async fn test_place_without_bet_id_fails() {
        let mut h = Harness::new(signed_in(), FakeApi::new());

        let outcome = place(h.ctx.clone(), BetActions::PLACE.empty()).await;

        assert_eq!(outcome, SagaOutcome::Failed);
        assert_eq!(kinds(&h.emitted()), vec![BetTypes::PLACE_FAILED]);
    }

    #[tokio::test]
    async fn test_pull_out_refreshes_open_bets() {
        let mut h = Harness::new(signed_in(), FakeApi::new().respond("pull_out_bet", Ok(json!({ "ok": true }))));

        pull_out_bet(h.ctx.clone(), BetActions::PULL_OUT_BET.create(json!({ "betId": "b1", "amount": 5, "outcome": 1 }))).await;

        assert_eq!(
            kinds(&h.emitted()),
            vec![BetTypes::PULL_OUT_BET_SUCCEEDED, BetTypes::FETCH_OPEN_BETS]
        );
    }

    #[tokio::test]
    async fn test_outcomes_failure_emits_nothing() {
        let mut h = Harness::new(AppState::new(), FakeApi::new());

        let outcome = fetch_outcomes(h.ctx.clone(), BetActions::FETCH_OUTCOMES.create(json!({ "betId": "b1", "amount": 1 }))).await;

        assert_eq!(outcome, SagaOutcome::Failed);
        assert!(h.emitted().is_empty());
    }

    #[tokio::test]
    async fn test_sell_outcomes_success() {
        let mut h = Harness::new(signed_in(), FakeApi::new().respond("get_sell_outcomes", Ok(json!({ "0": 4.2 }))));

        fetch_sell_outcomes(h.ctx.clone(), BetActions::FETCH_SELL_OUTCOMES.create(json!({ "betId": "b1", "amount": 1 }))).await;

        let emitted = h.emitted();
        assert_eq!(emitted[0].get("sellOutcomes"), Some(&json!({ "0": 4.2 })));
    }

    #[tokio::test]
    async fn test_open_bets_failure() {
        let mut h = Harness::new(signed_in(), FakeApi::new().respond("list_open_bets", Ok(Value::Null)));

        fetch_open_bets(h.ctx.clone(), BetActions::FETCH_OPEN_BETS.empty()).await;

        assert_eq!(kinds(&h.emitted()), vec![BetTypes::FETCH_OPEN_BETS_FAILED]);
    }

    #[tokio::test]
    async fn test_trade_history_accepts_wrapped_or_bare_list() {
        let trades = json!([{ "_id": "t1" }]);

        let mut wrapped = Harness::new(signed_in(), FakeApi::new().respond("get_trade_history", Ok(json!({ "trades": trades.clone() }))));
        fetch_trade_history(wrapped.ctx.clone(), BetActions::FETCH_TRADE_HISTORY.empty()).await;
        assert_eq!(wrapped.emitted()[0].get("trades"), Some(&trades));

        let mut bare = Harness::new(signed_in(), FakeApi::new().respond("get_trade_history", Ok(trades.clone())));
        fetch_trade_history(bare.ctx.clone(), BetActions::FETCH_TRADE_HISTORY.empty()).await;
        assert_eq!(bare.emitted()[0].get("trades"), Some(&trades));
    }
}
