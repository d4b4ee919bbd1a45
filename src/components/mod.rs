//! View components - pure render functions from render state to widgets

pub mod elon_game;
pub mod events;
pub mod news;
pub mod popup;
pub mod trades;

use ratatui::{prelude::*, widgets::*};

/// Decode the HTML entities news providers leave in titles and descriptions.
/// `&amp;` goes last so `&amp;lt;` decodes to `&lt;` and not `<`.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{}:{}", i + 1, t)))
        .collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        .divider(" ")
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Status color for a trade or bet state string
pub fn status_color(status: &str) -> Color {
    match status {
        "active" => Color::Green,
        "closed" | "sold" => Color::Yellow,
        "canceled" | "cancelled" => Color::Red,
        _ => Color::Gray,
    }
}

#[cfg(test)]
pub(crate) fn rendered(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            draw(f, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();

    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
