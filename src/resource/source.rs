//! The data source seam consumed by the view-state layer.
//!
//! Views talk to an [`ApiSource`] rather than to [`TrizApiClient`] directly,
//! so any backing implementation (including test stubs) can be injected.

use thiserror::Error;

use crate::api::error::ApiResult;
use crate::api::types::{
    CurrenciesResponse, CurrencyListParams, DataStatus, HealthResponse, StockListParams,
    StocksResponse,
};
use crate::api::TrizApiClient;

/// Result envelope for one source call.
///
/// Exactly one of `data`/`error` is meaningfully populated; both absent
/// means the call produced nothing, which views treat as "no data yet".
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// Successful payload
    pub data: Option<T>,
    /// Application-level error reported by the backend
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Envelope carrying a payload.
    pub fn data(value: T) -> Self {
        Self {
            data: Some(value),
            error: None,
        }
    }

    /// Envelope carrying an application-level error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// Envelope with neither payload nor error.
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

/// Failure of the source call itself, as opposed to an error reported
/// inside the envelope.
///
/// `message` is `None` when the failure carries no usable description; the
/// consuming view substitutes its per-resource fallback message.
#[derive(Debug, Clone, Default, Error)]
#[error("{}", .message.as_deref().unwrap_or("source call failed"))]
pub struct CallFailure {
    /// Description of the failure, if one is available
    pub message: Option<String>,
}

impl CallFailure {
    /// Failure with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Failure without any usable message.
    pub fn silent() -> Self {
        Self::default()
    }
}

/// Result of one source call: an envelope, or a failure of the call itself.
pub type SourceResult<T> = Result<Envelope<T>, CallFailure>;

/// The slice of the API surface the view-state layer consumes.
#[allow(async_fn_in_trait)]
pub trait ApiSource {
    /// Fetch backend health.
    async fn health(&self) -> SourceResult<HealthResponse>;

    /// Fetch one page of stocks.
    async fn stocks(&self, params: &StockListParams) -> SourceResult<StocksResponse>;

    /// Fetch one page of currency pairs.
    async fn currencies(&self, params: &CurrencyListParams) -> SourceResult<CurrenciesResponse>;

    /// Fetch data-collection status.
    async fn data_status(&self) -> SourceResult<DataStatus>;
}

impl<S: ApiSource> ApiSource for &S {
    async fn health(&self) -> SourceResult<HealthResponse> {
        (**self).health().await
    }

    async fn stocks(&self, params: &StockListParams) -> SourceResult<StocksResponse> {
        (**self).stocks(params).await
    }

    async fn currencies(&self, params: &CurrencyListParams) -> SourceResult<CurrenciesResponse> {
        (**self).currencies(params).await
    }

    async fn data_status(&self) -> SourceResult<DataStatus> {
        (**self).data_status().await
    }
}

/// Fold a client result into the source contract: responses the backend
/// answered with (any HTTP status) surface through the envelope, while
/// transport and decoding failures become [`CallFailure`].
fn classify<T>(result: ApiResult<T>) -> SourceResult<T> {
    match result {
        Ok(value) => Ok(Envelope::data(value)),
        Err(err) => match err.status_code() {
            Some(_) => Ok(Envelope::error(err.to_string())),
            None => Err(CallFailure::new(err.to_string())),
        },
    }
}

impl ApiSource for TrizApiClient {
    async fn health(&self) -> SourceResult<HealthResponse> {
        classify(self.get_health().await)
    }

    async fn stocks(&self, params: &StockListParams) -> SourceResult<StocksResponse> {
        classify(self.get_stocks(params).await)
    }

    async fn currencies(&self, params: &CurrencyListParams) -> SourceResult<CurrenciesResponse> {
        classify(self.get_currencies(params).await)
    }

    async fn data_status(&self) -> SourceResult<DataStatus> {
        classify(self.get_data_status().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::{ApiError, ErrorResponse};

    #[test]
    fn test_classify_success() {
        let result = classify::<u32>(Ok(7)).unwrap();
        assert_eq!(result.data, Some(7));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_classify_status_error_becomes_envelope() {
        let err = ApiError::NotFound(ErrorResponse::from_text("Stock not found".to_string()));
        let result = classify::<u32>(Err(err)).unwrap();
        assert!(result.data.is_none());
        assert_eq!(result.error.as_deref(), Some("Not found: Stock not found"));
    }

    #[test]
    fn test_classify_decode_error_becomes_failure() {
        let err = ApiError::Deserialize("unexpected shape".to_string());
        let failure = classify::<u32>(Err(err)).unwrap_err();
        assert_eq!(
            failure.message.as_deref(),
            Some("Deserialization error: unexpected shape")
        );
    }

    #[test]
    fn test_call_failure_display() {
        assert_eq!(CallFailure::new("boom").to_string(), "boom");
        assert_eq!(CallFailure::silent().to_string(), "source call failed");
    }
}
