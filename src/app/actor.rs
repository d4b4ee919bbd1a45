//! App actor - message loop processing UI events and dispatched actions

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::{mpsc, watch};

use crate::app::state::AppState;
use crate::constants::{route_with_parameters, EventTypes as Kinds, Routes};
use crate::messages::ui_events::{AppTab, InputMode};
use crate::messages::{
    Action, BetActions, EventActions, PopupActions, PopupKinds, RenderState, RouterActions,
    UiEvent,
};

/// Actions dispatched once at startup
pub fn startup_actions(news_query: &str) -> Vec<Action> {
    vec![
        EventActions::FETCH_ALL.empty(),
        EventActions::FETCH_TAGS.empty(),
        EventActions::FETCH_HOME_EVENTS.create(json!({ "eventType": Kinds::STREAMED })),
        EventActions::FETCH_NEWS_DATA.create(json!({ "params": { "q": news_query } })),
        BetActions::FETCH_TRADE_HISTORY.empty(),
    ]
}

/// App actor that owns the state. Every action is reduced first, then the
/// new snapshot is published, then the action is handed to the saga runtime.
pub struct AppActor {
    state: AppState,
    news_query: String,
    state_tx: watch::Sender<Arc<AppState>>,
    saga_tx: mpsc::UnboundedSender<Action>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        news_query: String,
        state_tx: watch::Sender<Arc<AppState>>,
        saga_tx: mpsc::UnboundedSender<Action>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            news_query,
            state_tx,
            saga_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut action_rx: mpsc::UnboundedReceiver<Action>,
        startup: Vec<Action>,
    ) {
        for action in startup {
            self.dispatch(action);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received; dropping saga_tx stops the runtime
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(action) = action_rx.recv() => {
                    self.dispatch(action);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
        tracing::info!("App actor stopped");
    }

    /// Reduce, publish, then offer the action to the coordinators
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(kind = action.kind(), "dispatch");
        self.state.reduce(&action);
        self.state_tx.send_replace(Arc::new(self.state.clone()));
        if self.saga_tx.send(action).is_err() {
            tracing::debug!("Saga runtime stopped, action not forwarded");
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Tabs
            UiEvent::SwitchTab(tab) => self.switch_tab(tab),

            // Lists
            UiEvent::NextEvent => {
                let len = self.state.visible_events().len();
                if self.state.ui.selected_event + 1 < len {
                    self.state.ui.selected_event += 1;
                }
            }
            UiEvent::PrevEvent => {
                self.state.ui.selected_event = self.state.ui.selected_event.saturating_sub(1);
            }
            UiEvent::ScrollUp => self.state.ui.scroll = self.state.ui.scroll.saturating_sub(1),
            UiEvent::ScrollDown => self.state.ui.scroll = self.state.ui.scroll.saturating_add(1),

            // Fetching
            UiEvent::Refresh => self.refresh(),
            UiEvent::CycleCategory => {
                self.state.ui.category_index = (self.state.ui.category_index + 1) % self.state.categories().len();
                let category = self.state.current_category();
                self.state.ui.selected_event = 0;
                self.fetch_filtered();
                self.dispatch(RouterActions::PUSH.create(json!({
                    "path": route_with_parameters(Routes::EVENTS, &[("category", category.as_str())])
                })));
            }
            UiEvent::ShowChart => {
                let bet_id = self
                    .state
                    .selected_event()
                    .and_then(|e| e.bets.first())
                    .map(|b| b.id.clone());
                match bet_id {
                    Some(bet_id) => self.dispatch(EventActions::FETCH_CHART_DATA.create(json!({ "betId": bet_id }))),
                    None => self.state.ui.status = String::from("Selected event has no bets"),
                }
            }

            // Filter editing
            UiEvent::StartFilter => self.state.ui.input_mode = InputMode::Editing,
            UiEvent::StopFilter => self.state.ui.input_mode = InputMode::Normal,
            UiEvent::FilterChar(c) => self.state.ui.filter_input.push(c),
            UiEvent::FilterBackspace => {
                self.state.ui.filter_input.pop();
            }
            UiEvent::ApplyFilter => {
                self.state.ui.input_mode = InputMode::Normal;
                self.state.ui.selected_event = 0;
                self.fetch_filtered();
            }

            // Event deletion
            UiEvent::RequestDelete => {
                if let Some(id) = self.state.selected_event().map(|e| e.id.clone()) {
                    self.dispatch(PopupActions::SHOW.create(json!({
                        "popupType": PopupKinds::DELETE_EVENT,
                        "options": { "eventId": id },
                    })));
                }
            }
            UiEvent::ConfirmPopup => {
                let event_id = match self.state.popup.popup_type.as_deref() {
                    Some(PopupKinds::DELETE_EVENT) => self.state.popup.options.get("eventId").cloned(),
                    _ => None,
                };
                match event_id {
                    // The coordinator hides the popup itself
                    Some(id) => self.dispatch(EventActions::DELETE_EVENT.create(json!({ "eventId": id }))),
                    None => self.dispatch(PopupActions::HIDE.empty()),
                }
            }
            UiEvent::CancelPopup => self.dispatch(PopupActions::HIDE.empty()),

            // Game promo
            UiEvent::PlayGame => {
                self.dispatch(RouterActions::PUSH.create(json!({ "path": Routes::ROSI_GAME })));
                self.state.ui.status = format!("Opening {}", Routes::ROSI_GAME);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.ui.show_help = !self.state.ui.show_help,
            UiEvent::CloseHelp => self.state.ui.show_help = false,

            // System
            UiEvent::Quit => return true,
        }

        false
    }

    fn switch_tab(&mut self, tab: AppTab) {
        self.state.ui.active_tab = tab;
        self.state.ui.scroll = 0;

        let category = self.state.current_category();
        let path = match tab {
            AppTab::Events => route_with_parameters(Routes::EVENTS, &[("category", category.as_str())]),
            AppTab::Game => Routes::ELON_GAME.to_string(),
            AppTab::News | AppTab::Trades => Routes::HOME.to_string(),
        };
        self.dispatch(RouterActions::PUSH.create(json!({ "path": path })));

        if tab == AppTab::Trades {
            self.dispatch(BetActions::FETCH_OPEN_BETS.empty());
        }
    }

    fn refresh(&mut self) {
        match self.state.ui.active_tab {
            AppTab::Events => {
                self.state.ui.filter_applied = false;
                self.dispatch(EventActions::FETCH_ALL.empty());
                self.dispatch(EventActions::FETCH_TAGS.empty());
            }
            AppTab::News => {
                let query = Value::from(self.news_query.as_str());
                self.dispatch(EventActions::FETCH_NEWS_DATA.create(json!({ "params": { "q": query } })));
            }
            AppTab::Trades => {
                self.dispatch(BetActions::FETCH_TRADE_HISTORY.empty());
                self.dispatch(BetActions::FETCH_OPEN_BETS.empty());
            }
            AppTab::Game => {}
        }
    }

    /// Filtered listing for the current category and filter text
    fn fetch_filtered(&mut self) {
        let mut params = serde_json::Map::new();
        params.insert("category".into(), Value::from(self.state.current_category()));
        let name = self.state.ui.filter_input.trim();
        if !name.is_empty() {
            params.insert("name".into(), Value::from(name));
        }
        self.state.ui.filter_applied = true;
        self.dispatch(EventActions::FETCH_FILTERED.create(json!({ "params": params })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{BetTypes, EventTypes, PopupTypes, RouterTypes};

    struct Fixture {
        actor: AppActor,
        state_rx: watch::Receiver<Arc<AppState>>,
        saga_rx: mpsc::UnboundedReceiver<Action>,
    }

    impl Fixture {
        fn new() -> Self {
            let (state_tx, state_rx) = watch::channel(Arc::new(AppState::new()));
            let (saga_tx, saga_rx) = mpsc::unbounded_channel();
            let (render_tx, _render_rx) = mpsc::unbounded_channel();
            let actor = AppActor::new(AppState::new(), "bets".into(), state_tx, saga_tx, render_tx);
            Fixture { actor, state_rx, saga_rx }
        }

        fn forwarded(&mut self) -> Vec<&'static str> {
            let mut kinds = Vec::new();
            while let Ok(action) = self.saga_rx.try_recv() {
                kinds.push(action.kind());
            }
            kinds
        }

        fn with_events(mut self) -> Self {
            self.actor.dispatch(EventActions::FETCH_ALL_SUCCEEDED.create(json!({
                "events": [
                    { "_id": "e1", "name": "Derby", "bets": [{ "_id": "b1" }] },
                    { "_id": "e2", "name": "Final" }
                ]
            })));
            self.forwarded();
            self
        }
    }

    #[test]
    fn test_dispatch_reduces_before_publishing_and_forwarding() {
        let mut fx = Fixture::new();

        fx.actor.dispatch(RouterActions::PUSH.create(json!({ "path": "/elon-game" })));

        assert_eq!(fx.state_rx.borrow().router.location, "/elon-game");
        assert_eq!(fx.forwarded(), vec![RouterTypes::PUSH]);
    }

    #[test]
    fn test_startup_actions() {
        let kinds: Vec<_> = startup_actions("crypto").iter().map(Action::kind).collect();
        assert!(kinds.contains(&EventTypes::FETCH_ALL));
        assert!(kinds.contains(&EventTypes::FETCH_NEWS_DATA));
        assert!(kinds.contains(&BetTypes::FETCH_TRADE_HISTORY));
    }

    #[test]
    fn test_delete_flow_shows_popup_then_dispatches_delete() {
        let mut fx = Fixture::new().with_events();
        fx.actor.handle_ui_event(UiEvent::NextEvent);

        fx.actor.handle_ui_event(UiEvent::RequestDelete);
        assert!(fx.actor.state().popup.visible);
        assert_eq!(fx.actor.state().popup.options.get("eventId"), Some(&json!("e2")));
        assert_eq!(fx.actor.state().to_render_state().popup_subject.as_deref(), Some("Final"));

        fx.actor.handle_ui_event(UiEvent::ConfirmPopup);
        assert_eq!(fx.forwarded(), vec![PopupTypes::SHOW, EventTypes::DELETE_EVENT]);
    }

    #[test]
    fn test_cancel_popup_hides_it() {
        let mut fx = Fixture::new().with_events();
        fx.actor.handle_ui_event(UiEvent::RequestDelete);
        fx.actor.handle_ui_event(UiEvent::CancelPopup);

        assert!(!fx.actor.state().popup.visible);
        assert_eq!(fx.forwarded(), vec![PopupTypes::SHOW, PopupTypes::HIDE]);
    }

    #[test]
    fn test_show_chart_uses_first_bet() {
        let mut fx = Fixture::new().with_events();

        fx.actor.handle_ui_event(UiEvent::ShowChart);
        assert_eq!(fx.forwarded(), vec![EventTypes::FETCH_CHART_DATA]);

        fx.actor.handle_ui_event(UiEvent::NextEvent);
        fx.actor.handle_ui_event(UiEvent::ShowChart);
        assert!(fx.forwarded().is_empty());
        assert_eq!(fx.actor.state().ui.status, "Selected event has no bets");
    }

    #[test]
    fn test_apply_filter_fetches_filtered_listing() {
        let mut fx = Fixture::new();
        fx.actor.handle_ui_event(UiEvent::StartFilter);
        for c in "derby".chars() {
            fx.actor.handle_ui_event(UiEvent::FilterChar(c));
        }
        fx.actor.handle_ui_event(UiEvent::ApplyFilter);

        assert_eq!(fx.actor.state().ui.input_mode, InputMode::Normal);
        assert!(fx.actor.state().ui.filter_applied);

        let forwarded = {
            let mut out = Vec::new();
            while let Ok(action) = fx.saga_rx.try_recv() {
                out.push(action);
            }
            out
        };
        assert_eq!(forwarded.len(), 1);
        let params = forwarded[0].object_field("params");
        assert_eq!(params.get("name"), Some(&json!("derby")));
        assert_eq!(params.get("category"), Some(&json!("all")));
    }

    #[test]
    fn test_play_game_routes_to_rosi() {
        let mut fx = Fixture::new();
        fx.actor.handle_ui_event(UiEvent::SwitchTab(AppTab::Game));
        assert_eq!(fx.actor.state().router.location, Routes::ELON_GAME);

        fx.actor.handle_ui_event(UiEvent::PlayGame);
        assert_eq!(fx.actor.state().router.location, Routes::ROSI_GAME);
    }

    #[test]
    fn test_quit() {
        let mut fx = Fixture::new();
        assert!(fx.actor.handle_ui_event(UiEvent::Quit));
    }
}
