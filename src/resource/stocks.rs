//! Paginated stock listing view.
//!
//! Maintains local fetch state for the stock list and refetches when the
//! parameter tuple (page, size, search, sector) changes.

use crate::api::types::{Stock, StockListParams, StocksResponse};
use crate::resource::source::ApiSource;
use crate::resource::state::FetchState;

/// Fallback error when a stock fetch fails without a message.
const FETCH_FALLBACK: &str = "Failed to fetch stocks";

/// View over the paginated stock listing.
#[derive(Debug)]
pub struct StocksView<S> {
    source: S,
    params: Option<StockListParams>,
    state: FetchState<StocksResponse>,
}

impl<S: ApiSource> StocksView<S> {
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
    /// call always fetches); a repeated tuple returns immediately. The
    /// tuple is recorded per attempt, not per success, so a failed page is
    /// not retried until the parameters change.
    pub async fn sync(&mut self, params: StockListParams) {
        if self.params.as_ref() == Some(&params) {
            return;
        }
        self.state.begin();
        let outcome = self.source.stocks(&params).await;
        self.params = Some(params);
        self.state.settle_keep(outcome, FETCH_FALLBACK);
    }

    /// The last fetched page of stocks; empty before the first payload.
    pub fn stocks(&self) -> &[Stock] {
        self.state.data().map(|page| page.stocks.as_slice()).unwrap_or_default()
    }

    /// Total stock count across all pages; 0 before the first payload.
    pub fn total(&self) -> u64 {
        self.state.data().map(|page| page.total).unwrap_or(0)
    }

    /// The parameter tuple of the last attempt, if any.
    pub fn params(&self) -> Option<&StockListParams> {
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
