//! Paginated currency listing view.
//!
//! Maintains local fetch state for the currency list and refetches when the
//! parameter tuple (page, size, search) changes.

use crate::api::types::{CurrenciesResponse, Currency, CurrencyListParams};
use crate::resource::source::ApiSource;
use crate::resource::state::FetchState;

/// Fallback error when a currency fetch fails without a message.
const FETCH_FALLBACK: &str = "Failed to fetch currencies";

/// View over the paginated currency listing.
#[derive(Debug)]
pub struct CurrenciesView<S> {
    source: S,
    params: Option<CurrencyListParams>,
    state: FetchState<CurrenciesResponse>,
}

impl<S: ApiSource> CurrenciesView<S> {
    /// Create a view over `source`. Nothing is fetched until `sync`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            params: None,
            state: FetchState::new(),
        }
    }

    /// Drive the view with the given parameter tuple.
    ///
    /// Fetches when the tuple differs from the one last fetched (the first
    /// call always fetches); a repeated tuple returns immediately.
    pub async fn sync(&mut self, params: CurrencyListParams) {
        if self.params.as_ref() == Some(&params) {
            return;
        }
        self.state.begin();
        let outcome = self.source.currencies(&params).await;
        self.params = Some(params);
        self.state.settle_keep(outcome, FETCH_FALLBACK);
    }

    /// The last fetched page of currency pairs; empty before the first
    /// payload.
    pub fn currencies(&self) -> &[Currency] {
        self.state
            .data()
            .map(|page| page.currencies.as_slice())
            .unwrap_or_default()
    }

    /// Total currency count across all pages; 0 before the first payload.
    pub fn total(&self) -> u64 {
        self.state.data().map(|page| page.total).unwrap_or(0)
    }

    /// The parameter tuple of the last attempt, if any.
    pub fn params(&self) -> Option<&CurrencyListParams> {
        self.params.as_ref()
    }

    /// Whether a fetch is in flight (or none has settled yet).
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Error from the last settled attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}
