//! Popup overlays: the popup slice and keyboard help

use ratatui::{prelude::*, widgets::*};

use crate::components::centered_rect;
use crate::messages::{PopupKinds, RenderState};

pub fn render(f: &mut Frame, state: &RenderState, area: Rect) {
    if !state.popup_visible {
        return;
    }
    let popup_area = centered_rect(50, 25, area);

    let (title, body) = match state.popup_type.as_deref() {
        Some(PopupKinds::DELETE_EVENT) => (
            " Delete event ",
            format!(
                "Delete \"{}\"?\n\nThis cannot be undone.",
                state.popup_subject.as_deref().unwrap_or("this event")
            ),
        ),
        Some(other) => (" Notice ", other.to_string()),
        None => (" Notice ", String::new()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(title)
        .title_bottom(Line::from(" y/Enter:confirm  n/Esc:cancel ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let popup = Paragraph::new(body).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 WAGERDESK - Keyboard Shortcuts

 NAVIGATION
   1-4                Switch tab
   ↑ / ↓              Select event / scroll

 EVENTS
   r                  Refresh
   c                  Cycle category
   /                  Filter by text (Enter applies)
   h / Enter          Load chart for the selected bet
   d                  Delete selected event

 ELON GAME
   p                  Play now

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
