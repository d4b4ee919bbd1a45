//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application tabs
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum AppTab {
    #[default]
    Events,
    News,
    Game,
    Trades,
}

impl AppTab {
    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Events => "Events",
            AppTab::News => "News",
            AppTab::Game => "Elon Game",
            AppTab::Trades => "Trades",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(AppTab),

    // Lists
    NextEvent,
    PrevEvent,
    ScrollUp,
    ScrollDown,

    // Fetching
    Refresh,
    CycleCategory,
    ShowChart,

    // Filter editing
    StartFilter,
    StopFilter,
    FilterChar(char),
    FilterBackspace,
    ApplyFilter,

    // Event deletion
    RequestDelete,
    ConfirmPopup,
    CancelPopup,

    // Game promo
    PlayGame,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_tab: AppTab,
    input_mode: InputMode,
    show_help: bool,
    popup_visible: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if popup_visible {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some(UiEvent::ConfirmPopup),
            KeyCode::Esc | KeyCode::Char('n') => Some(UiEvent::CancelPopup),
            _ => None,
        };
    }

    if input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::StopFilter),
            KeyCode::Enter => Some(UiEvent::ApplyFilter),
            KeyCode::Backspace => Some(UiEvent::FilterBackspace),
            KeyCode::Char(c) => Some(UiEvent::FilterChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::Events)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::News)),
        KeyCode::Char('3') => return Some(UiEvent::SwitchTab(AppTab::Game)),
        KeyCode::Char('4') => return Some(UiEvent::SwitchTab(AppTab::Trades)),
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => return Some(UiEvent::Refresh),
        _ => {}
    }

    match active_tab {
        AppTab::Events => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevEvent),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextEvent),
            KeyCode::Char('c') => Some(UiEvent::CycleCategory),
            KeyCode::Char('f') | KeyCode::Char('/') => Some(UiEvent::StartFilter),
            KeyCode::Char('h') | KeyCode::Enter => Some(UiEvent::ShowChart),
            KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::RequestDelete),
            _ => None,
        },
        AppTab::News | AppTab::Trades => match key.code {
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
        AppTab::Game => match key.code {
            KeyCode::Char('p') | KeyCode::Enter => Some(UiEvent::PlayGame),
            _ => None,
        },
    }
}
