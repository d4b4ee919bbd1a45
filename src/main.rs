//! Wagerdesk - Actor-based betting market terminal
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - state, reducer and action dispatch
//! - Saga Layer (Tokio) - async effect coordinators

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::{mpsc, watch};
use tracing_subscriber::EnvFilter;

use wagerdesk::app::{startup_actions, AppActor, AppState};
use wagerdesk::components::{self, elon_game, events, news, popup, trades};
use wagerdesk::config::Config;
use wagerdesk::messages::ui_events::{key_to_ui_event, AppTab, InputMode};
use wagerdesk::messages::{Action, RenderState, UiEvent};
use wagerdesk::network::{create_client, HttpApi, NewsClient};
use wagerdesk::sagas::{Registry, SagaContext, SagaRuntime};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!(api_url = %config.api_url, "Starting");

    // Clients
    let client = create_client(config.request_timeout_secs)?;
    let api = Arc::new(HttpApi::new(client.clone(), config.api_url.clone()));
    let news_client = Arc::new(NewsClient::new(
        client,
        config.news_url.clone(),
        config.news_api_key.clone(),
    ));
    let registry = Registry::standard()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let initial = AppState::from_config(&config);
    let (state_tx, state_rx) = watch::channel(Arc::new(initial.clone()));
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (dispatch_tx, dispatch_rx) = mpsc::unbounded_channel::<Action>();
    let (saga_tx, saga_rx) = mpsc::unbounded_channel::<Action>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn saga runtime
    let ctx = SagaContext::new(api, news_client, state_rx, dispatch_tx, config.empty_response);
    tokio::spawn(SagaRuntime::new(registry, ctx).run(saga_rx));

    // Spawn app actor
    let app_actor = AppActor::new(initial, config.news_query.clone(), state_tx, saga_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, dispatch_rx, startup_actions(&config.news_query)));

    // Run UI loop; it sleeps between polls so the actors get the thread
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if !event::poll(Duration::ZERO)? {
            tokio::time::sleep(Duration::from_millis(30)).await;
        } else if let Event::Key(key) = event::read()? {
            if let Some(event) = key_to_ui_event(
                key,
                current_state.active_tab,
                current_state.input_mode,
                current_state.show_help,
                current_state.popup_visible,
            ) {
                let quit = matches!(event, UiEvent::Quit);
                let _ = ui_tx.send(event);
                if quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

const TABS: [AppTab; 4] = [AppTab::Events, AppTab::News, AppTab::Game, AppTab::Trades];

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let titles: Vec<&str> = TABS.iter().map(AppTab::title).collect();
    let selected = TABS.iter().position(|t| *t == state.active_tab).unwrap_or(0);
    f.render_widget(components::render_tabs(&titles, selected), main_chunks[0]);

    match state.active_tab {
        AppTab::Events => events::render(f, state, main_chunks[1]),
        AppTab::News => news::render(f, state, main_chunks[1]),
        AppTab::Game => elon_game::render(f, state, main_chunks[1]),
        AppTab::Trades => trades::render(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    popup::render(f, state, area);
    if state.show_help {
        popup::render_help(f, area);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hint = if state.is_loading {
        " Loading... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Enter:apply filter "
    } else {
        " 1-4:tab | r:refresh | ?:help | q:quit "
    };

    let line = Line::from(vec![
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {} ", state.location), Style::default().fg(Color::Blue)),
        Span::styled(state.status.clone(), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
