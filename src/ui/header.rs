use crate::catalog::Category;
use crate::ui::app::{App, InputMode};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let state = app.state();
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let text_style = Style::default().fg(HEADER_TEXT);

        let mut spans = vec![
            Span::styled(" Cinescope ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("│", separator_style),
        ];

        // Category tabs keep their highlight even while a search
        // overrides them; the search span shows which one is driving.
        for (index, category) in Category::ALL.into_iter().enumerate() {
            let style = if state.query.category == category {
                text_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                separator_style
            };
            spans.push(Span::styled(
                format!(" {}:{} ", index + 1, category.label()),
                style,
            ));
        }

        spans.push(Span::styled("│ ", separator_style));
        spans.push(Span::styled(
            format!("{} ", state.query.language.label()),
            text_style,
        ));
        spans.push(Span::styled("│ ", separator_style));

        match app.mode() {
            InputMode::Search => {
                spans.push(Span::styled("/", Style::default().fg(ACCENT)));
                spans.push(Span::styled(state.pending_search.clone(), text_style));
                spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
            }
            InputMode::Browse if state.query.search_active() => {
                spans.push(Span::styled(
                    format!("search: {}", state.query.search_text.trim()),
                    Style::default().fg(ACCENT),
                ));
            }
            InputMode::Browse => {
                spans.push(Span::styled("/ to search", separator_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
