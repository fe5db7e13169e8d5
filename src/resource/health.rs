//! Backend health view.
//!
//! Maintains local fetch state for the backend health banner.

use crate::api::types::HealthResponse;
use crate::resource::source::ApiSource;
use crate::resource::state::FetchState;

/// Fallback error when a health fetch fails without a message.
const FETCH_FALLBACK: &str = "Failed to fetch health status";

/// View over the backend health resource.
///
/// Fetches once per instance; repeated [`sync`](Self::sync) calls are
/// no-ops.
#[derive(Debug)]
pub struct HealthView<S> {
    source: S,
    primed: bool,
    state: FetchState<HealthResponse>,
}

impl<S: ApiSource> HealthView<S> {
    /// Create a view over `source`. Nothing is fetched until `sync`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            primed: false,
            state: FetchState::new(),
        }
    }

    /// Drive the view: the first call fetches, later calls return
    /// immediately.
    pub async fn sync(&mut self) {
        if self.primed {
            return;
        }
        self.primed = true;
        self.state.begin();
        let outcome = self.source.health().await;
        self.state.settle(outcome, FETCH_FALLBACK);
    }

    /// Latest health payload, if one has been fetched.
    pub fn health(&self) -> Option<&HealthResponse> {
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
