//! View-state layer for dashboard consumers.
//!
//! This module provides local fetch-state management for the dashboard
//! resources:
//! - `health`: backend health banner
//! - `stocks`: paginated stock listing
//! - `currencies`: paginated currency listing
//! - `status`: data-collection status, with caller-forced refresh
//!
//! Each view owns its `{data, loading, error}` triple, drives fetches
//! against an injected [`ApiSource`], and settles every attempt to either a
//! payload or an error message. Paged views refetch exactly when their
//! parameter tuple changes. Errors never propagate past a view; they are
//! surfaced through `error()` for the rendering side to display.

pub mod currencies;
pub mod health;
pub mod source;
pub mod state;
pub mod status;
pub mod stocks;

pub use currencies::CurrenciesView;
pub use health::HealthView;
pub use source::{ApiSource, CallFailure, Envelope, SourceResult};
pub use state::FetchState;
pub use status::StatusView;
pub use stocks::StocksView;
