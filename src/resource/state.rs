//! Generic fetch-state primitive shared by all views.
//!
//! Holds the `{data, loading, error}` triple for one resource and applies
//! the per-attempt transitions: an attempt begins (loading), then settles
//! exactly once to a payload or an error message.

use crate::resource::source::SourceResult;

/// Fetch state for a single resource.
///
/// Reports loading from construction until the first attempt settles.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    /// Create a fresh state with no data and loading set.
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    /// The last successfully fetched payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Whether an attempt is in flight (or none has settled yet).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message from the last settled attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Begin an attempt. A previous error stays visible until the attempt
    /// settles.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Begin a caller-forced attempt: loading is set and the previous error
    /// cleared before the underlying call is made.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle an attempt for a snapshot resource: the payload (or its
    /// absence) replaces the held data.
    pub fn settle(&mut self, outcome: SourceResult<T>, fallback: &str) {
        self.settle_inner(outcome, fallback, false);
    }

    /// Settle an attempt for a paged resource: an envelope without payload
    /// leaves the held data in place, so consumers keep rendering the last
    /// good page alongside the error.
    pub fn settle_keep(&mut self, outcome: SourceResult<T>, fallback: &str) {
        self.settle_inner(outcome, fallback, true);
    }

    fn settle_inner(&mut self, outcome: SourceResult<T>, fallback: &str, keep_on_empty: bool) {
        match outcome {
            Ok(envelope) => {
                if let Some(message) = envelope.error {
                    if envelope.data.is_some() {
                        tracing::warn!("envelope carried both payload and error; surfacing the error");
                    }
                    self.error = Some(message);
                } else if let Some(payload) = envelope.data {
                    self.data = Some(payload);
                    self.error = None;
                } else if !keep_on_empty {
                    self.data = None;
                }
            }
            Err(failure) => {
                self.error = Some(failure.message.unwrap_or_else(|| fallback.to_string()));
            }
        }
        self.loading = false;
    }
}
