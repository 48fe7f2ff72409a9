use crate::catalog::Category;
use crate::ui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.mode() {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Browse => handle_browse_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) => app.push_search_char(ch),
        _ => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('l') => app.cycle_language(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('x') => app.clear_search(),
        KeyCode::Esc => app.dismiss_error(),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.set_category(Category::ALL[index]);
        }
        KeyCode::Left => {
            // The pager is a no-op at its edges, like the original's
            // disabled buttons; no redundant refetch of the same page.
            if app.state().query.page > 1 {
                app.prev_page();
            }
        }
        KeyCode::Right => {
            if app.state().query.page < app.state().max_page() {
                app.next_page();
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
