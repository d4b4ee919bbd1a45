//! Reducer - applies actions to the state slices

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::app::AppState;
use crate::messages::{
    Action, BetTypes, EventTypes, PopupTypes, RouterTypes, UserTypes, WORKFLOWS,
};
use crate::models::{Event, NewsData, Tag, Trade, User};

/// Decode a JSON list element by element, skipping entries that do not fit `T`
fn decode_list<T: DeserializeOwned>(value: &Value, what: &str) -> Vec<T> {
    let Some(items) = value.as_array() else {
        if !value.is_null() {
            tracing::warn!(what, "Expected a list");
        }
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(what, error = %e, "Skipping malformed entry");
                None
            }
        })
        .collect()
}

impl AppState {
    /// Apply one action. Unknown actions leave the state untouched.
    pub fn reduce(&mut self, action: &Action) {
        match action.kind() {
            // ========================
            // Events
            // ========================
            EventTypes::FETCH_ALL | EventTypes::FETCH_FILTERED | EventTypes::FETCH_HOME_EVENTS => {
                self.event.loading = true;
            }
            EventTypes::FETCH_ALL_SUCCEEDED => {
                self.event.events = decode_list::<Event>(&action.value("events"), "events");
                self.event.loading = false;
                self.clamp_selection();
            }
            EventTypes::FETCH_FILTERED_SUCCESS => {
                self.event.filtered_events = decode_list::<Event>(&action.value("events"), "events");
                self.event.loading = false;
                self.clamp_selection();
            }
            EventTypes::SET_DEFAULT_PARAMS => {
                self.event.default_params = action.object_field("params");
            }
            EventTypes::FETCH_HOME_EVENTS_SUCCESS => {
                let key = match action.get("eventType") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => String::from("all"),
                    Some(other) => other.to_string(),
                };
                self.event.home_events.insert(
                    key,
                    crate::app::state::HomeEvents {
                        state: action.value("state"),
                        events: decode_list(&action.value("events"), "home events"),
                        page: action.value("page"),
                        count: action.value("count"),
                    },
                );
                self.event.loading = false;
            }
            EventTypes::FETCH_TAGS_SUCCESS => {
                self.event.tags = decode_list::<Tag>(&action.value("tags"), "tags");
            }
            EventTypes::FETCH_CHART_DATA_SUCCESS => {
                self.event.chart_data = Some(action.value("chartData"));
            }
            EventTypes::FETCH_NEWS_DATA_SUCCESS => {
                self.event.news_data = match serde_json::from_value::<NewsData>(action.value("newsData")) {
                    Ok(news) => Some(news),
                    Err(e) => {
                        tracing::warn!(error = %e, "Malformed news data");
                        None
                    }
                };
            }
            EventTypes::DELETE_EVENT_SUCCESS => {
                let deleted = action
                    .get("event")
                    .and_then(|e| e.get("_id").or_else(|| e.get("id")))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                if let Some(id) = deleted {
                    self.event.events.retain(|e| e.id != id);
                    self.event.filtered_events.retain(|e| e.id != id);
                    self.clamp_selection();
                }
                self.ui.status = String::from("Event deleted");
            }

            // ========================
            // Users
            // ========================
            UserTypes::FETCH_SUCCEEDED => {
                match serde_json::from_value::<User>(action.value("user")) {
                    Ok(user) if !user.user_id.is_empty() => {
                        if !self.user.contains(&user.user_id) {
                            self.user.users.push(user);
                        }
                    }
                    Ok(_) => tracing::warn!("User without id ignored"),
                    Err(e) => tracing::warn!(error = %e, "Malformed user"),
                }
            }

            // ========================
            // Bets
            // ========================
            BetTypes::CREATE_SUCCEEDED => {
                self.bet.last_created = Some(action.value("bet"));
                self.ui.status = String::from("Bet created");
            }
            BetTypes::PLACE_SUCCEEDED => {
                self.ui.status = format!(
                    "Placed {} on outcome {}",
                    action.value("amount"),
                    action.value("outcome")
                );
            }
            BetTypes::PULL_OUT_BET_SUCCEEDED => {
                self.ui.status = String::from("Pulled out of bet");
            }
            BetTypes::SET_OUTCOMES => {
                self.bet.outcomes = action.value("outcomes");
            }
            BetTypes::SET_SELL_OUTCOMES => {
                self.bet.sell_outcomes = action.value("sellOutcomes");
            }
            BetTypes::FETCH_OPEN_BETS_SUCCEEDED => {
                self.bet.open_bets = action
                    .value("openBets")
                    .as_array()
                    .cloned()
                    .unwrap_or_default();
            }
            BetTypes::FETCH_TRADE_HISTORY_SUCCESS => {
                self.bet.trades = decode_list::<Trade>(&action.value("trades"), "trades");
            }

            // ========================
            // Popup and routing
            // ========================
            PopupTypes::SHOW => {
                self.popup.visible = true;
                self.popup.popup_type = action.str_field("popupType").map(str::to_string);
                self.popup.options = action.object_field("options");
            }
            PopupTypes::HIDE => {
                self.popup = Default::default();
            }
            RouterTypes::PUSH => {
                if let Some(path) = action.str_field("path") {
                    self.router.location = path.to_string();
                }
            }

            kind => {
                if WORKFLOWS.iter().any(|w| w.failure == Some(kind)) {
                    self.event.loading = false;
                    self.ui.status = format!("{} failed", kind);
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_events().len();
        if self.ui.selected_event >= len {
            self.ui.selected_event = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{BetActions, EventActions, PopupActions, RouterActions, UserActions};
    use serde_json::json;

    #[test]
    fn test_fetch_all_succeeded_replaces_events() {
        let mut state = AppState::new();
        state.reduce(&EventActions::FETCH_ALL.empty());
        assert!(state.event.loading);

        state.reduce(&EventActions::FETCH_ALL_SUCCEEDED.create(json!({
            "events": [{ "_id": "e1", "name": "One" }, "garbage", { "_id": "e2", "name": "Two" }]
        })));

        assert!(!state.event.loading);
        let ids: Vec<_> = state.event.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[test]
    fn test_records_with_loose_fields_are_kept() {
        let mut state = AppState::new();
        state.reduce(&EventActions::FETCH_ALL_SUCCEEDED.create(json!({
            "events": [
                { "_id": "e1", "date": "2021-06-01" },
                { "_id": "e2", "bets": [{ "creator": 42 }] },
                { "_id": "e3" }
            ]
        })));
        state.reduce(&BetActions::FETCH_TRADE_HISTORY_SUCCESS.create(json!({
            "trades": [{ "_id": "t1", "investmentAmount": 10 }]
        })));

        let ids: Vec<_> = state.event.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
        assert!(state.event.events[0].date.is_some());
        assert_eq!(state.event.events[1].bets[0].creator.as_deref(), Some("42"));
        assert_eq!(state.bet.trades.len(), 1);
        assert_eq!(state.bet.trades[0].investment_amount, "10");
    }

    #[test]
    fn test_failure_sets_status() {
        let mut state = AppState::new();
        state.reduce(&EventActions::FETCH_ALL.empty());
        state.reduce(&EventActions::FETCH_ALL_FAILED.empty());
        assert!(!state.event.loading);
        assert_eq!(state.ui.status, "Event/FETCH_ALL_FAILED failed");
    }

    #[test]
    fn test_user_fetched_once() {
        let mut state = AppState::new();
        let action = UserActions::FETCH_SUCCEEDED.create(json!({ "user": { "userId": "u1", "username": "ann" } }));
        state.reduce(&action);
        state.reduce(&action);
        assert_eq!(state.user.users.len(), 1);
        assert!(state.user.contains("u1"));
    }

    #[test]
    fn test_delete_success_removes_event_and_clamps_selection() {
        let mut state = AppState::new();
        state.reduce(&EventActions::FETCH_ALL_SUCCEEDED.create(json!({
            "events": [{ "_id": "e1" }, { "_id": "e2" }]
        })));
        state.ui.selected_event = 1;

        state.reduce(&EventActions::DELETE_EVENT_SUCCESS.create(json!({ "event": { "_id": "e2" } })));

        assert_eq!(state.event.events.len(), 1);
        assert_eq!(state.ui.selected_event, 0);
    }

    #[test]
    fn test_popup_and_router() {
        let mut state = AppState::new();
        state.reduce(&PopupActions::SHOW.create(json!({ "popupType": "deleteEvent", "options": { "eventId": "e1" } })));
        assert!(state.popup.visible);
        assert_eq!(state.popup.options.get("eventId"), Some(&json!("e1")));

        state.reduce(&PopupActions::HIDE.empty());
        assert!(!state.popup.visible);

        state.reduce(&RouterActions::PUSH.create(json!({ "path": "/events/all" })));
        assert_eq!(state.router.location, "/events/all");
    }

    #[test]
    fn test_home_events_keyed_by_type() {
        let mut state = AppState::new();
        state.reduce(&EventActions::FETCH_HOME_EVENTS_SUCCESS.create(json!({
            "eventType": "streamed", "events": [{ "_id": "e1" }], "page": 1, "count": 10
        })));
        let home = &state.event.home_events["streamed"];
        assert_eq!(home.events.len(), 1);
        assert_eq!(home.count, json!(10));
    }

    #[test]
    fn test_trade_history_and_outcomes() {
        let mut state = AppState::new();
        state.reduce(&BetActions::FETCH_TRADE_HISTORY_SUCCESS.create(json!({
            "trades": [{ "_id": "t1", "betId": "b1", "status": "active" }]
        })));
        state.reduce(&BetActions::SET_OUTCOMES.create(json!({ "outcomes": { "0": 1.5 } })));
        assert_eq!(state.bet.trades[0].bet_id, "b1");
        assert_eq!(state.bet.outcomes, json!({ "0": 1.5 }));
    }
}
