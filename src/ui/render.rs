use crate::catalog::quality;
use crate::catalog::MovieSummary;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, TAG_TEXT,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header_area, body_area, footer_area) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app), header_area);
    draw_body(frame, app, body_area);
    frame.render_widget(Footer::new().widget(app, footer_area), footer_area);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let [mut list_area, detail_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(area);

    if let Some(message) = app.error_banner() {
        let [banner_area, rest] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(list_area);
        let banner = Line::from(vec![
            Span::styled(format!(" {message}"), Style::default().fg(STATUS_ERROR)),
            Span::styled("  (Esc dismisses)", Style::default().fg(HEADER_SEPARATOR)),
        ]);
        frame.render_widget(Paragraph::new(banner), banner_area);
        list_area = rest;
    }

    let state = app.state();
    match &state.results {
        Some(page) => {
            let items: Vec<ListItem> = page
                .items
                .iter()
                .map(|movie| ListItem::new(movie_line(movie)))
                .collect();
            let list = List::new(items)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
            let mut list_state = ListState::default();
            list_state.select(Some(app.selected()));
            frame.render_stateful_widget(list, list_area, &mut list_state);
        }
        None if state.status.is_loading() => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " Loading catalog…",
                    Style::default().fg(HEADER_SEPARATOR),
                ))),
                list_area,
            );
        }
        None => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " Nothing fetched yet.",
                    Style::default().fg(HEADER_SEPARATOR),
                ))),
                list_area,
            );
        }
    }

    frame.render_widget(detail_widget(app), detail_area);
}

fn movie_line(movie: &MovieSummary) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {}", movie.title),
        Style::default().fg(HEADER_TEXT),
    )];
    if let Some(year) = &movie.release_year {
        spans.push(Span::styled(
            format!(" ({year})"),
            Style::default().fg(HEADER_SEPARATOR),
        ));
    }

    let rating = match movie.rating {
        Some(rating) => format!("  ★ {rating:.1}"),
        None => "  ★ –".to_string(),
    };
    spans.push(Span::styled(rating, Style::default().fg(ACCENT)));

    spans.push(Span::raw("  "));
    for tag in quality::classify(movie.rating) {
        spans.push(Span::styled(
            format!("[{}]", tag.label()),
            Style::default().fg(TAG_TEXT),
        ));
    }

    Line::from(spans)
}

fn detail_widget(app: &App) -> Paragraph<'static> {
    let line = match app.selected_movie() {
        Some(movie) => {
            let poster = app
                .poster_url(movie)
                .unwrap_or_else(|| "no poster available".to_string());
            Line::from(vec![
                Span::styled(
                    format!(" #{}", movie.id),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
                Span::styled(
                    format!("  {poster}"),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
            ])
        }
        None => Line::from(Span::raw("")),
    };
    Paragraph::new(line)
}
