//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{AppTab, InputMode};
use crate::models::{Event, NewsArticle, Trade};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub active_tab: AppTab,
    pub input_mode: InputMode,

    // Events
    pub events: Vec<Event>,
    pub selected_event: usize,
    pub category: String,
    pub filter_input: String,
    pub tags: Vec<String>,
    pub chart_points: usize,

    // News ticker
    pub articles: Vec<NewsArticle>,

    // Bets
    pub trades: Vec<Trade>,
    pub open_bets: usize,
    pub known_users: usize,

    // Popup and routing
    pub popup_visible: bool,
    pub popup_type: Option<String>,
    pub popup_subject: Option<String>,
    pub location: String,

    pub is_loading: bool,
    pub scroll: u16,
    pub show_help: bool,
    pub status: String,
}
