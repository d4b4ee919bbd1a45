//! News ticker

use ratatui::{prelude::*, widgets::*};

use crate::components::unescape;
use crate::messages::RenderState;
use crate::models::NewsArticle;

/// "Read more on <source>", or plain "Read more" when the source is unnamed
pub fn source_label(article: &NewsArticle) -> String {
    match article.source.as_ref().and_then(|s| s.name.as_deref()) {
        Some(name) if !name.is_empty() => format!("Read more on {}", name),
        _ => String::from("Read more"),
    }
}

/// One block of lines per article: title, description, link line
pub fn article_lines(articles: &[NewsArticle]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for article in articles {
        let mut title = vec![Span::styled(
            unescape(&article.title),
            Style::default().fg(Color::White).bold(),
        )];
        if let Some(published) = article.published_at {
            title.push(Span::styled(
                format!("  {}", published.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(title));

        if !article.description.is_empty() {
            lines.push(Line::from(unescape(&article.description)));
        }

        lines.push(Line::from(vec![
            Span::styled(source_label(article), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {}", article.url), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::default());
    }

    lines
}

pub fn render(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" News ({}) ", state.articles.len()));

    let mut lines = article_lines(&state.articles);
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No news yet. Press 'r' to refresh.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let news = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(news, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::rendered;
    use crate::models::NewsSource;

    fn article(title: &str, source: Option<&str>) -> NewsArticle {
        NewsArticle {
            title: title.into(),
            description: "Odds &amp; ends".into(),
            url: "https://news.example/a".into(),
            source: Some(NewsSource {
                name: source.map(str::to_string),
            }),
            published_at: None,
        }
    }

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(&article("a", Some("Wire"))), "Read more on Wire");
        assert_eq!(source_label(&article("a", None)), "Read more");

        let mut unsourced = article("a", None);
        unsourced.source = None;
        assert_eq!(source_label(&unsourced), "Read more");
    }

    #[test]
    fn test_renders_unescaped_articles() {
        let state = RenderState {
            articles: vec![article("Cats &lt;3 dogs", Some("Wire"))],
            ..Default::default()
        };

        let out = rendered(60, 10, |f, area| render(f, &state, area));

        assert!(out.contains("Cats <3 dogs"));
        assert!(out.contains("Odds & ends"));
        assert!(out.contains("Read more on Wire"));
    }

    #[test]
    fn test_empty_ticker_shows_hint() {
        let out = rendered(60, 5, |f, area| render(f, &RenderState::default(), area));
        assert!(out.contains("No news yet"));
    }
}
