//! State owned by the orchestration controller.

use crate::catalog::{CatalogError, Category, Language, ResultPage};

/// Hard client-side ceiling on browseable page depth.
///
/// The service caps result depth at 500 pages; deeper requests are
/// rejected locally instead of being sent to the network. This is a
/// client guarantee only, not a verified server one.
pub const MAX_PAGE_DEPTH: u32 = 500;

/// The committed browse position: what the next fetch asks for.
///
/// Search is active whenever `search_text` trims non-empty; the category
/// is then ignored for the fetch but retained for when search clears.
/// Mutated only through controller intents, never by fetch results.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseQuery {
    pub category: Category,
    pub language: Language,
    pub page: u32,
    pub search_text: String,
}

impl BrowseQuery {
    pub fn new(category: Category, language: Language) -> Self {
        Self {
            category,
            language,
            page: 1,
            search_text: String::new(),
        }
    }

    /// True when the next fetch will be a search query.
    pub fn search_active(&self) -> bool {
        !self.search_text.trim().is_empty()
    }
}

/// Lifecycle of the current fetch.
#[derive(Debug, Default)]
pub enum FetchStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The latest fetch completed and its page is current.
    Success,

    /// The latest fetch failed; any previous page stays visible.
    Failed(CatalogError),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// The current error, if the latest fetch failed.
    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            FetchStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Everything the presentation layer reads: the committed query, the
/// pending (uncommitted) search buffer, the fetch status, and the last
/// successfully fetched page.
#[derive(Debug)]
pub struct BrowseState {
    pub query: BrowseQuery,
    pub pending_search: String,
    pub status: FetchStatus,
    pub results: Option<ResultPage>,
}

impl BrowseState {
    pub fn new(query: BrowseQuery) -> Self {
        Self {
            pending_search: query.search_text.clone(),
            query,
            status: FetchStatus::default(),
            results: None,
        }
    }

    /// Last known total page count; 1 until a page has been fetched.
    pub fn total_pages(&self) -> u32 {
        self.results
            .as_ref()
            .map(|page| page.total_pages)
            .unwrap_or(1)
    }

    /// Highest page the user can navigate to right now.
    pub fn max_page(&self) -> u32 {
        self.total_pages().min(MAX_PAGE_DEPTH)
    }
}

/// Clamp a requested page into `[1, min(total_pages, MAX_PAGE_DEPTH)]`.
pub fn clamp_page(requested: u32, total_pages: u32) -> u32 {
    requested.clamp(1, total_pages.max(1).min(MAX_PAGE_DEPTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_known_total() {
        assert_eq!(clamp_page(10, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn clamp_respects_the_depth_ceiling() {
        assert_eq!(clamp_page(600, 10_000), 500);
        assert_eq!(clamp_page(500, 10_000), 500);
    }

    #[test]
    fn clamp_handles_a_zero_total() {
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn search_is_active_only_for_non_blank_text() {
        let mut query = BrowseQuery::new(Category::Popular, Language::En);
        assert!(!query.search_active());

        query.search_text = "   ".to_string();
        assert!(!query.search_active());

        query.search_text = " dune ".to_string();
        assert!(query.search_active());
    }

    #[test]
    fn total_pages_defaults_to_one_before_any_fetch() {
        let state = BrowseState::new(BrowseQuery::new(Category::Popular, Language::En));
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.max_page(), 1);
    }

    #[test]
    fn max_page_is_capped_at_the_depth_ceiling() {
        let mut state = BrowseState::new(BrowseQuery::new(Category::Popular, Language::En));
        state.results = Some(ResultPage {
            items: Vec::new(),
            total_pages: 10_000,
        });
        assert_eq!(state.max_page(), MAX_PAGE_DEPTH);
    }
}
