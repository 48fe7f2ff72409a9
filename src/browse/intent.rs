//! Intents applied to the orchestration controller.

use crate::catalog::{CatalogError, Category, Language, ResultPage};

/// The controller's single mutation surface.
///
/// User actions and fetch completions both arrive here; nothing else
/// touches browse state.
#[derive(Debug)]
pub enum BrowseIntent {
    /// Switch the curated list. Resets to page 1. An active search is
    /// retained and keeps precedence over the new category.
    SetCategory(Category),

    /// Switch the content language. Resets to page 1.
    SetLanguage(Language),

    /// Update the pending search buffer. Never triggers a fetch on its
    /// own; submission is explicit.
    SetSearchText(String),

    /// Commit the pending buffer and fetch. An all-whitespace buffer
    /// deactivates search instead of issuing an empty query.
    SubmitSearch,

    /// Navigate to a page, clamped to the known page bounds.
    SetPage(u32),

    /// A fetch finished. Applied only when `seq` is still the latest
    /// issued sequence number; stale completions are dropped.
    FetchCompleted {
        seq: u64,
        result: Result<ResultPage, CatalogError>,
    },
}
