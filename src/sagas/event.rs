//! Event workflows: listings, tags, chart data, news and deletion

use std::collections::HashSet;

use serde_json::{json, Value};

use crate::constants::{route_with_parameters, EventTypes as Kinds, Routes};
use crate::messages::{Action, EventActions, EventTypes, PopupActions, RouterActions, UserActions};
use crate::network::ApiError;
use crate::sagas::context::SagaContext;
use crate::sagas::outcome::SagaOutcome;

pub async fn fetch_all(ctx: SagaContext, _action: Action) -> SagaOutcome {
    let result = ctx.api().list_events().await;

    match ctx.settle(result, EventTypes::FETCH_ALL) {
        Some(events) => {
            ctx.put(EventActions::FETCH_ALL_SUCCEEDED.create(json!({ "events": events })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::FETCH_ALL_FAILED.empty());
            SagaOutcome::Failed
        }
    }
}

/// Request every bet creator not yet in the user slice, once per invocation,
/// in event/bet order
pub async fn fetch_all_succeeded(ctx: SagaContext, action: Action) -> SagaOutcome {
    let events = action.value("events");
    let mut requested: HashSet<String> = HashSet::new();

    for event in events.as_array().into_iter().flatten() {
        let bets = event.get("bets").and_then(Value::as_array);

        for bet in bets.into_iter().flatten() {
            let user_id = match bet.get("creator") {
                Some(Value::String(id)) if !id.is_empty() => id.clone(),
                Some(Value::Number(id)) => id.to_string(),
                _ => continue,
            };

            let known = ctx.select(|s| s.user.contains(&user_id));
            if known || requested.contains(&user_id) {
                continue;
            }

            requested.insert(user_id.clone());
            ctx.put(UserActions::FETCH.create(json!({ "userId": user_id })));
            // TODO: fetch all unknown creators in a single call once the user API takes a list of ids
        }
    }

    SagaOutcome::Succeeded
}

pub async fn fetch_filtered_events(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let mut params = ctx.select(|s| s.event.default_params.clone());
    params.extend(action.object_field("params"));

    let result = ctx.api().list_events_filtered(token.as_deref(), &params).await;

    match ctx.settle(result, EventTypes::FETCH_FILTERED) {
        Some(events) => {
            ctx.put(EventActions::SET_DEFAULT_PARAMS.create(json!({ "params": params })));
            ctx.put(EventActions::FETCH_FILTERED_SUCCESS.create(json!({ "events": events })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::FETCH_FILTERED_FAIL.empty());
            SagaOutcome::Failed
        }
    }
}

pub async fn fetch_home_events(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let mut params = ctx.select(|s| s.event.default_params.clone());

    let category = action
        .str_field("category")
        .filter(|c| !c.is_empty())
        .unwrap_or("all");

    params.insert("type".into(), action.value("eventType"));
    params.insert("page".into(), action.value("page"));
    params.insert("count".into(), action.value("count"));
    params.insert("category".into(), Value::from(category));
    params.insert("upcoming".into(), action.value("upcoming"));
    params.insert("deactivated".into(), action.value("deactivated"));

    let result = ctx.api().list_events_filtered(token.as_deref(), &params).await;

    match ctx.settle(result, EventTypes::FETCH_HOME_EVENTS) {
        Some(events) => {
            ctx.put(EventActions::FETCH_HOME_EVENTS_SUCCESS.create(json!({
                "eventType": params["type"],
                "state": action.value("state"),
                "events": events,
                "page": params["page"],
                "count": params["count"],
            })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::FETCH_HOME_EVENTS_FAIL.empty());
            SagaOutcome::Failed
        }
    }
}

pub async fn fetch_tags(ctx: SagaContext, _action: Action) -> SagaOutcome {
    let result = ctx.api().get_tags().await;

    match ctx.settle(result, EventTypes::FETCH_TAGS) {
        Some(body) => {
            let tags = body.get("data").cloned().unwrap_or(Value::Null);
            ctx.put(EventActions::FETCH_TAGS_SUCCESS.create(json!({ "tags": tags })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::FETCH_TAGS_FAIL.empty());
            SagaOutcome::Failed
        }
    }
}

/// Chart data for `betId`, falling back to `params.betId`
pub async fn fetch_history_chart_data(ctx: SagaContext, action: Action) -> SagaOutcome {
    let token = ctx.token();
    let params = action.object_field("params");
    let bet_id = action
        .str_field("betId")
        .or_else(|| params.get("betId").and_then(Value::as_str))
        .map(str::to_string);

    let result = match bet_id {
        Some(bet_id) => {
            ctx.api()
                .get_event_history_chart_data(token.as_deref(), &bet_id, &params)
                .await
        }
        None => Err(ApiError::MissingParameter("betId")),
    };

    match ctx.settle(result, EventTypes::FETCH_CHART_DATA) {
        Some(data) => {
            ctx.put(EventActions::FETCH_CHART_DATA_SUCCESS.create(json!({ "chartData": data })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::FETCH_CHART_DATA_FAIL.empty());
            SagaOutcome::Failed
        }
    }
}

pub async fn fetch_news_data(ctx: SagaContext, action: Action) -> SagaOutcome {
    let params = action.object_field("params");
    let result = ctx.news().get_news(&params).await;

    match ctx.settle(result, EventTypes::FETCH_NEWS_DATA) {
        Some(data) => {
            ctx.put(EventActions::FETCH_NEWS_DATA_SUCCESS.create(json!({ "newsData": data })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::FETCH_NEWS_DATA_FAIL.empty());
            SagaOutcome::Failed
        }
    }
}

/// Where to land after deleting an event of `event_type`
pub fn route_after_delete(event_type: Option<&str>) -> String {
    let route = match event_type {
        Some(Kinds::STREAMED) => Routes::LIVE_EVENTS,
        Some(Kinds::NON_STREAMED) => Routes::EVENTS,
        _ => Routes::HOME,
    };
    route_with_parameters(route, &[("category", "all")])
}

pub async fn delete_event(ctx: SagaContext, action: Action) -> SagaOutcome {
    ctx.put(PopupActions::HIDE.empty());

    let token = ctx.token();
    let result = match action.str_field("eventId") {
        Some(event_id) => ctx.api().delete_event(token.as_deref(), event_id).await,
        None => Err(ApiError::MissingParameter("eventId")),
    };

    match ctx.settle(result, EventTypes::DELETE_EVENT) {
        Some(event) => {
            let path = route_after_delete(event.get("type").and_then(Value::as_str));
            ctx.put_all([
                EventActions::FETCH_ALL.empty(),
                RouterActions::PUSH.create(json!({ "path": path })),
                EventActions::DELETE_EVENT_SUCCESS.create(json!({ "event": event })),
            ]);
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(EventActions::DELETE_EVENT_FAIL.empty());
            SagaOutcome::Failed
        }
    }
}
