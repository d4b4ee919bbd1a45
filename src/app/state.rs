//! App state - the store's state slices, pure data with no I/O logic

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::config::Config;
use crate::constants::Routes;
use crate::messages::ui_events::{AppTab, InputMode};
use crate::messages::RenderState;
use crate::models::{Event, NewsData, Tag, Trade, User};

/// Authentication slice
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthenticationState {
    pub token: Option<String>,
}

/// User slice: users fetched so far
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub users: Vec<User>,
}

impl UserState {
    pub fn contains(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u.user_id == user_id)
    }
}

/// One page of home events for an event type
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeEvents {
    pub state: Value,
    pub events: Vec<Event>,
    pub page: Value,
    pub count: Value,
}

/// Event slice
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventState {
    pub events: Vec<Event>,
    pub filtered_events: Vec<Event>,
    pub default_params: Map<String, Value>,
    pub home_events: HashMap<String, HomeEvents>,
    pub tags: Vec<Tag>,
    pub chart_data: Option<Value>,
    pub news_data: Option<NewsData>,
    pub loading: bool,
}

/// Bet slice
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BetState {
    pub outcomes: Value,
    pub sell_outcomes: Value,
    pub open_bets: Vec<Value>,
    pub trades: Vec<Trade>,
    pub last_created: Option<Value>,
}

/// Popup slice
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupState {
    pub visible: bool,
    pub popup_type: Option<String>,
    pub options: Map<String, Value>,
}

/// Router slice
#[derive(Clone, Debug, PartialEq)]
pub struct RouterState {
    pub location: String,
}

impl Default for RouterState {
    fn default() -> Self {
        RouterState {
            location: String::from(Routes::HOME),
        }
    }
}

/// Terminal-only state, driven by the app actor
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub active_tab: AppTab,
    pub input_mode: InputMode,
    pub selected_event: usize,
    pub category_index: usize,
    pub filter_input: String,
    /// Show the filtered listing instead of the full one
    pub filter_applied: bool,
    pub scroll: u16,
    pub show_help: bool,
    /// Status line text, last failure or notice
    pub status: String,
}

/// Main application state - pure data, no I/O
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub authentication: AuthenticationState,
    pub user: UserState,
    pub event: EventState,
    pub bet: BetState,
    pub popup: PopupState,
    pub router: RouterState,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state seeded from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut state = AppState::new();
        state.authentication.token = config.auth_token.clone();
        state.event.default_params = config.default_params.clone();
        state
    }

    /// The listing currently shown: filtered results once a filter was applied
    pub fn visible_events(&self) -> &[Event] {
        if self.ui.filter_applied {
            &self.event.filtered_events
        } else {
            &self.event.events
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.visible_events().get(self.ui.selected_event)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.ui.active_tab,
            input_mode: self.ui.input_mode,
            events: self.visible_events().to_vec(),
            selected_event: self.ui.selected_event,
            category: self.current_category(),
            filter_input: self.ui.filter_input.clone(),
            tags: self.event.tags.iter().map(|t| t.name.clone()).collect(),
            articles: self
                .event
                .news_data
                .as_ref()
                .map(|n| n.articles.clone())
                .unwrap_or_default(),
            chart_points: self
                .event
                .chart_data
                .as_ref()
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or(0),
            trades: self.bet.trades.clone(),
            open_bets: self.bet.open_bets.len(),
            known_users: self.user.users.len(),
            popup_visible: self.popup.visible,
            popup_type: self.popup.popup_type.clone(),
            popup_subject: self.popup_subject(),
            location: self.router.location.clone(),
            is_loading: self.event.loading,
            scroll: self.ui.scroll,
            show_help: self.ui.show_help,
            status: self.ui.status.clone(),
        }
    }

    /// Name of the event the popup refers to, falling back to its id
    fn popup_subject(&self) -> Option<String> {
        let id = self.popup.options.get("eventId")?.as_str()?;
        let name = self
            .event
            .events
            .iter()
            .chain(&self.event.filtered_events)
            .find(|e| e.id == id)
            .map(|e| e.name.clone())
            .filter(|name| !name.is_empty());
        Some(name.unwrap_or_else(|| id.to_string()))
    }

    /// Categories offered by the category cycler: `all` plus the known tags
    pub fn categories(&self) -> Vec<String> {
        std::iter::once(String::from("all"))
            .chain(self.event.tags.iter().map(|t| t.name.clone()))
            .collect()
    }

    pub fn current_category(&self) -> String {
        let categories = self.categories();
        categories
            .get(self.ui.category_index % categories.len())
            .cloned()
            .unwrap_or_else(|| String::from("all"))
    }
}
