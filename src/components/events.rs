//! Event list and the selected event's bets

use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Event;

fn type_color(event: &Event) -> Color {
    if event.is_streamed() {
        Color::Red
    } else {
        Color::Blue
    }
}

fn event_item(event: &Event) -> ListItem<'static> {
    let kind = if event.event_type.is_empty() {
        String::from("-")
    } else {
        event.event_type.clone()
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:13}", kind), Style::default().fg(type_color(event))),
        Span::raw(event.name.clone()),
        Span::styled(
            format!("  {} · {} bets", event.category, event.bets.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

pub fn render(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter
            Constraint::Min(5),    // List + details
        ])
        .split(area);

    draw_filter(f, state, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_list(f, state, body[0]);
    draw_details(f, state, body[1]);
}

fn draw_filter(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .title(format!(" Category: {} (c:cycle  /:filter) ", state.category));

    let input = Paragraph::new(state.filter_input.as_str()).block(block);
    f.render_widget(input, area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.filter_input.chars().count() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.is_loading { " [...]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Events ({}){} ", state.events.len(), loading));

    if state.events.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No events. Press 'r' to refresh.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state.events.iter().map(event_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_event));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_details(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Bets (h:chart  d:delete) ");

    let Some(event) = state.events.get(state.selected_event) else {
        f.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(event.name.clone(), Style::default().bold()))];
    if let Some(date) = event.date {
        lines.push(Line::from(Span::styled(
            date.format("%Y-%m-%d %H:%M").to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !event.tags.is_empty() {
        let tags: Vec<&str> = event.tags.iter().map(|t| t.name.as_str()).collect();
        lines.push(Line::from(format!("#{}", tags.join(" #"))));
    }
    lines.push(Line::default());

    for bet in &event.bets {
        lines.push(Line::from(Span::styled(
            bet.market_question.clone(),
            Style::default().fg(Color::Cyan),
        )));
        for outcome in &bet.outcomes {
            lines.push(Line::from(format!("  {}. {}", outcome.index, outcome.name)));
        }
        if let Some(end) = bet.end_date {
            lines.push(Line::from(Span::styled(
                format!("  ends {}", end.format("%Y-%m-%d")),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if state.chart_points > 0 {
        lines.push(Line::default());
        lines.push(Line::from(format!("Chart: {} points", state.chart_points)));
    }

    let details = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(details, area);
}
