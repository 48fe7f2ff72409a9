use ratatui::layout::{Constraint, Layout, Rect};

/// Split the screen into header, body, and footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(area);
    (header, body, footer)
}
