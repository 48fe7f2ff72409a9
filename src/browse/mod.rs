//! Browse orchestration: the intent-driven fetch controller.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Controller ──→ State ──→ View
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: the committed browse query, fetch status, and last page
//! - **Intent**: user actions and fetch completions
//! - **Controller**: the single mutation surface; every query change
//!   ends by issuing a fetch

mod controller;
mod intent;
mod state;

pub use controller::{BrowseController, FetchOutcome};
pub use intent::BrowseIntent;
pub use state::{clamp_page, BrowseQuery, BrowseState, FetchStatus, MAX_PAGE_DEPTH};
