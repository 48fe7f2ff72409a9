//! Terminal browsing client for a movie metadata catalog.
//!
//! The crate is split along the seams of the system:
//!
//! - [`catalog`]: the remote catalog client, response normalization, and
//!   the rating-to-quality-tag classifier.
//! - [`browse`]: the orchestration controller owning the browse query,
//!   fetch status, and the latest result page.
//! - [`config`]: TOML configuration and credential resolution.
//! - [`ui`]: the ratatui presentation shell.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
