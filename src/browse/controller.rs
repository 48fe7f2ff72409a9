//! The query/result orchestration controller.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace, warn};

use crate::catalog::{CatalogError, CatalogProvider, ResultPage};

use super::intent::BrowseIntent;
use super::state::{clamp_page, BrowseQuery, BrowseState, FetchStatus};

/// Completion report posted by a fetch task.
///
/// Carries the sequence number the fetch was issued under so the
/// controller can recognize superseded results on arrival.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<ResultPage, CatalogError>,
}

/// Sole owner of browse state and sole caller of the catalog.
///
/// All mutation flows through [`apply`](Self::apply); the presentation
/// layer reads through [`state`](Self::state) and feeds completed
/// fetches back as [`BrowseIntent::FetchCompleted`]. The run loop that
/// owns the controller serializes both, so state is never touched from
/// two call sites at once.
pub struct BrowseController {
    client: Arc<dyn CatalogProvider>,
    outcomes: UnboundedSender<FetchOutcome>,
    state: BrowseState,
    seq: u64,
}

impl BrowseController {
    pub fn new(
        client: Arc<dyn CatalogProvider>,
        outcomes: UnboundedSender<FetchOutcome>,
        query: BrowseQuery,
    ) -> Self {
        Self {
            client,
            outcomes,
            state: BrowseState::new(query),
            seq: 0,
        }
    }

    /// Read access for the presentation layer.
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Apply one intent.
    ///
    /// Every query-mutating intent ends by issuing a fetch; there is no
    /// hidden reactive layer deciding when to load.
    pub fn apply(&mut self, intent: BrowseIntent) {
        trace!(?intent, "applying browse intent");
        match intent {
            BrowseIntent::SetCategory(category) => {
                self.state.query.category = category;
                self.state.query.page = 1;
                self.refetch();
            }
            BrowseIntent::SetLanguage(language) => {
                self.state.query.language = language;
                self.state.query.page = 1;
                self.refetch();
            }
            BrowseIntent::SetSearchText(text) => {
                self.state.pending_search = text;
            }
            BrowseIntent::SubmitSearch => {
                self.state.query.search_text = self.state.pending_search.clone();
                self.state.query.page = 1;
                self.refetch();
            }
            BrowseIntent::SetPage(page) => {
                self.state.query.page = clamp_page(page, self.state.total_pages());
                self.refetch();
            }
            BrowseIntent::FetchCompleted { seq, result } => self.complete(seq, result),
        }
    }

    /// Issue a fetch for the current query.
    ///
    /// Called once at startup for the initial load, and by an explicit
    /// user reload. Failed fetches are never retried implicitly.
    pub fn refresh(&mut self) {
        self.refetch();
    }

    fn refetch(&mut self) {
        self.seq += 1;
        let seq = self.seq;
        self.state.status = FetchStatus::Loading;

        let client = Arc::clone(&self.client);
        let outcomes = self.outcomes.clone();
        let query = self.state.query.clone();
        tokio::spawn(async move {
            let result = if query.search_active() {
                client
                    .search(query.search_text.trim(), query.language, query.page)
                    .await
            } else {
                client
                    .fetch_category(query.category, query.language, query.page)
                    .await
            };
            // Send fails only when the run loop is shutting down.
            let _ = outcomes.send(FetchOutcome { seq, result });
        });
    }

    fn complete(&mut self, seq: u64, result: Result<ResultPage, CatalogError>) {
        if seq != self.seq {
            // A newer intent owns the state; this result must not regress it.
            debug!(seq, latest = self.seq, "discarding stale fetch result");
            return;
        }

        match result {
            Ok(page) => {
                self.state.results = Some(page);
                self.state.status = FetchStatus::Success;
            }
            Err(error) => {
                warn!(%error, "catalog fetch failed");
                // The previous page stays visible under the error banner.
                self.state.status = FetchStatus::Failed(error);
            }
        }
    }
}
