//! Trade history and open positions

use ratatui::{prelude::*, widgets::*};

use crate::components::status_color;
use crate::messages::RenderState;

pub fn render(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Trades ({})  open bets: {}  users: {} ",
        state.trades.len(),
        state.open_bets,
        state.known_users
    ));

    if state.trades.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No trades yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = state
        .trades
        .iter()
        .map(|t| {
            let when = t
                .created_at
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            Row::new(vec![
                Cell::from(when),
                Cell::from(t.bet_id.clone()),
                Cell::from(t.outcome_index.to_string()),
                Cell::from(t.investment_amount.clone()),
                Cell::from(t.outcome_tokens.clone()),
                Cell::from(t.status.clone()).style(Style::default().fg(status_color(&t.status))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(17),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Date", "Bet", "Outcome", "Invested", "Tokens", "Status"])
            .style(Style::default().bold()),
    )
    .block(block);

    f.render_widget(table, area);
}
