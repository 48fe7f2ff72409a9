use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_LOADING};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠦", "⠇", "⠏"];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let state = app.state();
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(
            format!(" Page {}/{}", state.query.page, state.max_page()),
            Style::default().fg(HEADER_TEXT),
        )];
        if state.status.is_loading() {
            let frame = SPINNER[app.animation_tick() as usize % SPINNER.len()];
            spans.push(Span::styled(
                format!(" {frame}"),
                Style::default().fg(STATUS_LOADING),
            ));
        }

        let hints = " │ ←/→ page │ ↑/↓ select │ 1-4 list │ l language │ / search │ x clear │ r reload │ q quit";
        spans.push(Span::styled(hints, text_style));

        let version = format!("v{} ", VERSION);

        // Pad using char count, not byte count, so box-drawing glyphs
        // don't skew the right-aligned version.
        let used_width: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used_width)
            .saturating_sub(version_width);

        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
