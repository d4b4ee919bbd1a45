//! Message types for inter-layer communication in the actor-based architecture.
//!
//! Actions flow from the UI and the sagas into the store; the store sends render
//! state back to the UI. The action catalog is split per domain.

pub mod action;
pub mod bet;
pub mod event;
pub mod render;
pub mod ui_events;
pub mod user;

pub use action::{Action, ActionCreator, FieldDefault, Payload};
pub use bet::{BetActions, BetTypes};
pub use event::{EventActions, EventTypes};
pub use render::RenderState;
pub use ui_events::UiEvent;
pub use user::{PopupActions, PopupKinds, PopupTypes, RouterActions, RouterTypes, UserActions, UserTypes};

/// A triggering action type with its success and optional failure types
#[derive(Debug, Clone, Copy)]
pub struct Workflow {
    pub trigger: &'static str,
    pub success: &'static str,
    pub failure: Option<&'static str>,
}

const fn workflow(
    trigger: &'static str,
    success: &'static str,
    failure: Option<&'static str>,
) -> Workflow {
    Workflow { trigger, success, failure }
}

/// Every API-backed workflow in the catalog
pub const WORKFLOWS: &[Workflow] = &[
    workflow(EventTypes::FETCH_ALL, EventTypes::FETCH_ALL_SUCCEEDED, Some(EventTypes::FETCH_ALL_FAILED)),
    workflow(EventTypes::FETCH_FILTERED, EventTypes::FETCH_FILTERED_SUCCESS, Some(EventTypes::FETCH_FILTERED_FAIL)),
    workflow(EventTypes::FETCH_HOME_EVENTS, EventTypes::FETCH_HOME_EVENTS_SUCCESS, Some(EventTypes::FETCH_HOME_EVENTS_FAIL)),
    workflow(EventTypes::FETCH_TAGS, EventTypes::FETCH_TAGS_SUCCESS, Some(EventTypes::FETCH_TAGS_FAIL)),
    workflow(EventTypes::FETCH_CHART_DATA, EventTypes::FETCH_CHART_DATA_SUCCESS, Some(EventTypes::FETCH_CHART_DATA_FAIL)),
    workflow(EventTypes::FETCH_NEWS_DATA, EventTypes::FETCH_NEWS_DATA_SUCCESS, Some(EventTypes::FETCH_NEWS_DATA_FAIL)),
    workflow(EventTypes::DELETE_EVENT, EventTypes::DELETE_EVENT_SUCCESS, Some(EventTypes::DELETE_EVENT_FAIL)),
    workflow(UserTypes::FETCH, UserTypes::FETCH_SUCCEEDED, Some(UserTypes::FETCH_FAILED)),
    workflow(BetTypes::CREATE, BetTypes::CREATE_SUCCEEDED, Some(BetTypes::CREATE_FAILED)),
    workflow(BetTypes::PLACE, BetTypes::PLACE_SUCCEEDED, Some(BetTypes::PLACE_FAILED)),
    workflow(BetTypes::PULL_OUT_BET, BetTypes::PULL_OUT_BET_SUCCEEDED, Some(BetTypes::PULL_OUT_BET_FAILED)),
    workflow(BetTypes::FETCH_OUTCOMES, BetTypes::SET_OUTCOMES, None),
    workflow(BetTypes::FETCH_SELL_OUTCOMES, BetTypes::SET_SELL_OUTCOMES, None),
    workflow(BetTypes::FETCH_OPEN_BETS, BetTypes::FETCH_OPEN_BETS_SUCCEEDED, Some(BetTypes::FETCH_OPEN_BETS_FAILED)),
    workflow(BetTypes::FETCH_TRADE_HISTORY, BetTypes::FETCH_TRADE_HISTORY_SUCCESS, None),
];

/// Look up the workflow triggered by `kind`
pub fn workflow_for(kind: &str) -> Option<&'static Workflow> {
    WORKFLOWS.iter().find(|w| w.trigger == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_trigger_has_one_workflow() {
        let mut seen = HashSet::new();
        for w in WORKFLOWS {
            assert!(seen.insert(w.trigger), "duplicate trigger {}", w.trigger);
        }
    }

    #[test]
    fn test_success_and_failure_types_are_distinct() {
        let mut outcomes = HashSet::new();
        for w in WORKFLOWS {
            assert_ne!(Some(w.success), w.failure);
            assert_ne!(w.trigger, w.success);
            assert!(outcomes.insert(w.success), "success {} shared", w.success);
            if let Some(failure) = w.failure {
                assert!(outcomes.insert(failure), "failure {} shared", failure);
            }
        }
    }

    const CATALOG: &[ActionCreator] = &[
        EventActions::FETCH_ALL,
        EventActions::FETCH_ALL_SUCCEEDED,
        EventActions::FETCH_ALL_FAILED,
        EventActions::FETCH_FILTERED,
        EventActions::FETCH_FILTERED_SUCCESS,
        EventActions::FETCH_FILTERED_FAIL,
        EventActions::SET_DEFAULT_PARAMS,
        EventActions::FETCH_HOME_EVENTS,
        EventActions::FETCH_HOME_EVENTS_SUCCESS,
        EventActions::FETCH_HOME_EVENTS_FAIL,
        EventActions::FETCH_TAGS,
        EventActions::FETCH_TAGS_SUCCESS,
        EventActions::FETCH_TAGS_FAIL,
        EventActions::FETCH_CHART_DATA,
        EventActions::FETCH_CHART_DATA_SUCCESS,
        EventActions::FETCH_CHART_DATA_FAIL,
        EventActions::FETCH_NEWS_DATA,
        EventActions::FETCH_NEWS_DATA_SUCCESS,
        EventActions::FETCH_NEWS_DATA_FAIL,
        EventActions::DELETE_EVENT,
        EventActions::DELETE_EVENT_SUCCESS,
        EventActions::DELETE_EVENT_FAIL,
        BetActions::CREATE,
        BetActions::CREATE_SUCCEEDED,
        BetActions::CREATE_FAILED,
        BetActions::PLACE,
        BetActions::PLACE_SUCCEEDED,
        BetActions::PLACE_FAILED,
        BetActions::SET_OUTCOMES,
        BetActions::SET_SELL_OUTCOMES,
        BetActions::FETCH_OUTCOMES,
        BetActions::FETCH_SELL_OUTCOMES,
        BetActions::FETCH_OPEN_BETS,
        BetActions::FETCH_OPEN_BETS_SUCCEEDED,
        BetActions::FETCH_OPEN_BETS_FAILED,
        BetActions::PULL_OUT_BET,
        BetActions::PULL_OUT_BET_SUCCEEDED,
        BetActions::PULL_OUT_BET_FAILED,
        BetActions::FETCH_TRADE_HISTORY,
        BetActions::FETCH_TRADE_HISTORY_SUCCESS,
        UserActions::FETCH,
        UserActions::FETCH_SUCCEEDED,
        UserActions::FETCH_FAILED,
        PopupActions::SHOW,
        PopupActions::HIDE,
        RouterActions::PUSH,
    ];

    #[test]
    fn test_every_creator_defaults_to_its_declared_fields() {
        let mut kinds = HashSet::new();
        for creator in CATALOG {
            assert!(kinds.insert(creator.kind()), "duplicate type {}", creator.kind());

            let action = creator.empty();
            let declared: Payload = creator
                .fields()
                .iter()
                .map(|(name, default)| (name.to_string(), default.to_value()))
                .collect();

            assert_eq!(action.kind(), creator.kind());
            assert_eq!(action.payload(), &declared, "defaults of {}", creator.kind());
            assert_eq!(creator.create(serde_json::json!({})), action, "{}", creator.kind());
        }
    }

    #[test]
    fn test_every_workflow_type_has_a_creator() {
        let kinds: HashSet<_> = CATALOG.iter().map(|c| c.kind()).collect();
        for w in WORKFLOWS {
            assert!(kinds.contains(w.trigger), "no creator for {}", w.trigger);
            assert!(kinds.contains(w.success), "no creator for {}", w.success);
            if let Some(failure) = w.failure {
                assert!(kinds.contains(failure), "no creator for {}", failure);
            }
        }
    }

    #[test]
    fn test_workflow_lookup() {
        let w = workflow_for(EventTypes::DELETE_EVENT).unwrap();
        assert_eq!(w.failure, Some(EventTypes::DELETE_EVENT_FAIL));
        assert!(workflow_for(EventTypes::FETCH_ALL_SUCCEEDED).is_none());
    }
}
