//! Remote catalog access.
//!
//! One query shape per curated list plus a free-text search, both
//! normalized into [`ResultPage`] before anything else sees them. The
//! [`CatalogProvider`] trait is the seam the orchestration controller
//! fetches through; [`CatalogClient`] is its HTTP implementation.

mod client;
mod error;
pub mod quality;
mod types;

pub use client::{CatalogClient, CatalogProvider};
pub use error::CatalogError;
pub use types::{Category, Language, MovieSummary, ResultPage};
