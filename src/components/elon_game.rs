//! Elon game promo

use ratatui::{prelude::*, widgets::*};

use crate::constants::{GameStep, Routes, ELON_GAME_STEPS};
use crate::messages::RenderState;

fn step_lines(step: &GameStep) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", step.number),
                Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
            ),
            Span::styled(format!(" {}", step.title), Style::default().bold()),
        ]),
        Line::from(format!("    {}", step.description)),
    ];
    if let Some(image) = step.image_text {
        lines.push(Line::from(Span::styled(
            format!("    [{}]", image),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());
    lines
}

pub fn render(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header + call to action
            Constraint::Min(0),    // Steps
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Elon Game",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(vec![
            Span::styled(" p ", Style::default().fg(Color::Black).bg(Color::Green).bold()),
            Span::styled(
                format!(" Play now → {}", Routes::ROSI_GAME),
                Style::default().fg(Color::Green),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(format!(" {} ", Routes::ELON_GAME)));
    f.render_widget(header, chunks[0]);

    let lines: Vec<Line> = ELON_GAME_STEPS.iter().flat_map(step_lines).collect();
    let steps = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" How to play "))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(steps, chunks[1]);
}
