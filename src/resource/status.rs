//! Data-collection status view.
//!
//! Maintains local fetch state for the collector status, with a
//! caller-forced refresh for manual "refresh" controls.

use crate::api::types::DataStatus;
use crate::resource::source::ApiSource;
use crate::resource::state::FetchState;

/// Fallback error when a status fetch fails without a message.
const FETCH_FALLBACK: &str = "Failed to fetch data status";

/// Fallback error when a forced refresh fails without a message.
const REFRESH_FALLBACK: &str = "Failed to refresh data status";

/// View over the data-collection status resource.
#[derive(Debug)]
pub struct StatusView<S> {
    source: S,
    primed: bool,
    state: FetchState<DataStatus>,
}

impl<S: ApiSource> StatusView<S> {
    /// Create a view over `source`. Nothing is fetched until `sync` or
    /// `refresh`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            primed: false,
            state: FetchState::new(),
        }
    }

    /// Drive the view: the first call fetches, later calls return
    /// immediately. A previous error stays visible while the attempt runs.
    pub async fn sync(&mut self) {
        if self.primed {
            return;
        }
        self.primed = true;
        self.state.begin();
        let outcome = self.source.data_status().await;
        self.state.settle(outcome, FETCH_FALLBACK);
    }

    /// Force a refetch regardless of `sync` history.
    ///
    /// Loading is set and any previous error cleared before the underlying
    /// call is made, so a manual refresh always presents as a clean attempt.
    pub async fn refresh(&mut self) {
        self.state.begin_refresh();
        let outcome = self.source.data_status().await;
        self.state.settle(outcome, REFRESH_FALLBACK);
    }

    /// Latest status payload, if one has been fetched.
    pub fn status(&self) -> Option<&DataStatus> {
        self.state.data()
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
