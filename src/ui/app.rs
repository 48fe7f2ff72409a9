//! Screen-level state: the controller plus input-mode bookkeeping.
//!
//! Everything browse-related is delegated to the controller; the app
//! only adds what the terminal needs on top (input mode, row selection,
//! banner dismissal, spinner animation).

use crate::browse::{BrowseController, BrowseIntent, BrowseState, FetchOutcome};
use crate::catalog::{Category, MovieSummary};

/// Which component owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate the result list.
    Browse,
    /// Keys edit the pending search buffer.
    Search,
}

pub struct App {
    controller: BrowseController,
    mode: InputMode,
    selected: usize,
    error_dismissed: bool,
    animation_tick: u8,
    should_quit: bool,
    poster_base_url: String,
}

impl App {
    pub fn new(controller: BrowseController, poster_base_url: String) -> Self {
        Self {
            controller,
            mode: InputMode::Browse,
            selected: 0,
            error_dismissed: false,
            animation_tick: 0,
            should_quit: false,
            poster_base_url,
        }
    }

    pub fn state(&self) -> &BrowseState {
        self.controller.state()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Kick off the initial fetch for the starting query.
    pub fn start(&mut self) {
        self.controller.refresh();
    }

    /// Explicit user-driven reload of the current query.
    pub fn reload(&mut self) {
        self.error_dismissed = false;
        self.controller.refresh();
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Feed a completed fetch back into the controller.
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        self.error_dismissed = false;
        self.controller.apply(BrowseIntent::FetchCompleted {
            seq: outcome.seq,
            result: outcome.result,
        });
        self.clamp_selection();
    }

    pub fn set_category(&mut self, category: Category) {
        self.begin_intent();
        self.controller.apply(BrowseIntent::SetCategory(category));
    }

    pub fn cycle_language(&mut self) {
        let next = self.state().query.language.cycled();
        self.begin_intent();
        self.controller.apply(BrowseIntent::SetLanguage(next));
    }

    pub fn next_page(&mut self) {
        let page = self.state().query.page.saturating_add(1);
        self.begin_intent();
        self.controller.apply(BrowseIntent::SetPage(page));
    }

    pub fn prev_page(&mut self) {
        let page = self.state().query.page.saturating_sub(1);
        self.begin_intent();
        self.controller.apply(BrowseIntent::SetPage(page));
    }

    pub fn enter_search(&mut self) {
        self.mode = InputMode::Search;
    }

    /// Leave search mode, restoring the pending buffer to the committed
    /// text so an abandoned edit leaves nothing behind.
    pub fn cancel_search(&mut self) {
        self.mode = InputMode::Browse;
        let committed = self.state().query.search_text.clone();
        self.controller.apply(BrowseIntent::SetSearchText(committed));
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut text = self.state().pending_search.clone();
        text.push(ch);
        self.controller.apply(BrowseIntent::SetSearchText(text));
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.state().pending_search.clone();
        text.pop();
        self.controller.apply(BrowseIntent::SetSearchText(text));
    }

    pub fn submit_search(&mut self) {
        self.mode = InputMode::Browse;
        self.begin_intent();
        self.controller.apply(BrowseIntent::SubmitSearch);
    }

    /// Clear the committed search, falling back to the category list.
    pub fn clear_search(&mut self) {
        self.controller
            .apply(BrowseIntent::SetSearchText(String::new()));
        self.begin_intent();
        self.controller.apply(BrowseIntent::SubmitSearch);
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.result_count();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    pub fn dismiss_error(&mut self) {
        self.error_dismissed = true;
    }

    /// Banner message, unless the user dismissed it.
    pub fn error_banner(&self) -> Option<String> {
        if self.error_dismissed {
            return None;
        }
        self.state().status.error().map(|error| error.user_message())
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.state().results.as_ref()?.items.get(self.selected)
    }

    /// Full poster URL for a movie, when it carries a poster reference.
    pub fn poster_url(&self, movie: &MovieSummary) -> Option<String> {
        movie
            .poster_ref
            .as_ref()
            .map(|path| format!("{}{}", self.poster_base_url, path))
    }

    fn begin_intent(&mut self) {
        self.error_dismissed = false;
        self.selected = 0;
    }

    fn result_count(&self) -> usize {
        self.state()
            .results
            .as_ref()
            .map(|page| page.items.len())
            .unwrap_or(0)
    }

    fn clamp_selection(&mut self) {
        let len = self.result_count();
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }
}
