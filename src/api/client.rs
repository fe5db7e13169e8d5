//! TRIZ Trade REST API client implementation.
//!
//! The [`TrizApiClient`] provides a type-safe interface for interacting with
//! the TRIZ Trade REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use triztrade::api::{StockListParams, TrizApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TrizApiClient::new("https://api.triztrade.dev")?;
//!
//!     // First page of stocks
//!     let page = client.get_stocks(&StockListParams::new()).await?;
//!     println!("Found {} stocks", page.total);
//!
//!     // Data collection status
//!     let status = client.get_data_status().await?;
//!     println!("Sources: {:?}", status.data_sources);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};

use crate::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::api::types::*;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum page size accepted by paginated endpoints.
const MAX_PAGE_SIZE: u32 = 100;

/// Maximum history window for stock detail requests, in days.
const MAX_HISTORY_DAYS: u32 = 365;

/// Retry configuration for the API client.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 = disabled)
    pub max_retries: u32,
    /// Base delay before first retry (ms)
    pub base_delay_ms: u64,
    /// Maximum delay between retries (ms)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 100,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Create a new retry config with the given max retries.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Set the base delay in milliseconds.
    pub fn with_base_delay_ms(mut self, ms: u64) -> Self {
        self.base_delay_ms = ms;
        self
    }

    /// Set the maximum delay in milliseconds.
    pub fn with_max_delay_ms(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    /// Calculate delay for a given attempt with exponential backoff and jitter.
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp_delay = self.base_delay_ms.saturating_mul(1 << attempt.min(10));
        let capped_delay = exp_delay.min(self.max_delay_ms);
        // Add jitter: 75-100% of calculated delay
        let jitter_range = capped_delay / 4;
        let jitter = rand::random::<u64>() % (jitter_range + 1);
        Duration::from_millis(capped_delay - jitter_range + jitter)
    }
}

/// Builder for configuring [`TrizApiClient`].
#[derive(Debug, Clone)]
pub struct TrizApiClientBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    retry_config: RetryConfig,
}

impl TrizApiClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Enable retries with exponential backoff.
    ///
    /// # Arguments
    ///
    /// * `config` - Retry configuration (use `RetryConfig::new(3)` for 3 retries with defaults)
    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<TrizApiClient> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10);

        // Build default headers
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        builder = builder.default_headers(headers);

        let http_client = builder.build()?;

        Ok(TrizApiClient {
            http_client,
            base_url: self.base_url,
            retry_config: self.retry_config,
        })
    }
}

/// TRIZ Trade REST API client.
///
/// Provides methods for all TRIZ Trade API endpoints: stocks, currencies,
/// sectors, price history, and data-collection management.
#[derive(Debug, Clone)]
pub struct TrizApiClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl TrizApiClient {
    /// Create a new client with the given base URL.
    ///
    /// Uses default settings (30s timeout, connection pooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        TrizApiClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> TrizApiClientBuilder {
        TrizApiClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Execute a GET request with optional retry logic.
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.execute_with_retry(|| self.http_client.get(url).send()).await
    }

    /// Execute a bodyless POST request with optional retry logic.
    async fn post<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        self.execute_with_retry(|| self.http_client.post(url).send()).await
    }

    /// Execute a request with retry logic.
    async fn execute_with_retry<T, F, Fut>(&self, request_fn: F) -> ApiResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;

        loop {
            let result = request_fn().await;

            match result {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return response.json::<T>().await.map_err(|e| {
                            ApiError::Deserialize(format!("Failed to deserialize response: {}", e))
                        });
                    }

                    // Parse error response
                    let error = self.parse_error_response(response).await;

                    // Check if we should retry
                    if attempt < self.retry_config.max_retries && Self::is_retryable_status(status) {
                        let delay = self.retry_config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max_retries = self.retry_config.max_retries,
                            delay_ms = delay.as_millis(),
                            status = %status,
                            "Retrying request after error"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(error);
                }
                Err(e) => {
                    let is_retryable = e.is_connect() || e.is_timeout() || e.is_request();

                    if attempt < self.retry_config.max_retries && is_retryable {
                        let delay = self.retry_config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max_retries = self.retry_config.max_retries,
                            delay_ms = delay.as_millis(),
                            error = %e,
                            "Retrying request after network error"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(ApiError::Http(e));
                }
            }
        }
    }

    /// Parse an error response into an ApiError.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status();
        let error_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                return Self::map_status_error(
                    status,
                    ErrorResponse::from_text(format!("HTTP {} (body unreadable: {})", status, e)),
                );
            }
        };

        let error_response = serde_json::from_str::<ErrorResponse>(&error_text)
            .unwrap_or_else(|_| ErrorResponse::from_text(error_text));

        Self::map_status_error(status, error_response)
    }

    /// Map HTTP status code to ApiError.
    fn map_status_error(status: StatusCode, response: ErrorResponse) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(response),
            StatusCode::NOT_FOUND => ApiError::NotFound(response),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(response)
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden(response),
            StatusCode::CONFLICT => ApiError::Conflict(response),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(response),
            StatusCode::NOT_IMPLEMENTED => ApiError::NotImplemented(response),
            _ if status.is_server_error() => ApiError::ServerError(response),
            _ => ApiError::UnexpectedStatus(status.as_u16(), response),
        }
    }

    /// Check if a status code is retryable.
    fn is_retryable_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    /// Append a query parameter, using `?` or `&` as appropriate.
    fn push_query(url: &mut String, key: &str, value: &str) {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    /// Validate that an identifier path segment is non-empty.
    fn validate_id(value: &str, field_name: &str) -> ApiResult<()> {
        if value.is_empty() {
            return Err(ApiError::InvalidParameter(format!("{} cannot be empty", field_name)));
        }
        Ok(())
    }

    /// Validate pagination bounds shared by the list endpoints.
    fn validate_paging(page: Option<u32>, size: Option<u32>) -> ApiResult<()> {
        if let Some(page) = page {
            if page == 0 {
                return Err(ApiError::InvalidParameter("Page must be >= 1".to_string()));
            }
        }
        if let Some(size) = size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(ApiError::InvalidParameter(format!("Size must be 1-{}", MAX_PAGE_SIZE)));
            }
        }
        Ok(())
    }

    /// Validate a history window in days.
    fn validate_days(days: u32) -> ApiResult<()> {
        if days == 0 || days > MAX_HISTORY_DAYS {
            return Err(ApiError::InvalidParameter(format!("Days must be 1-{}", MAX_HISTORY_DAYS)));
        }
        Ok(())
    }

    // =========================================================================
    // Health endpoints
    // =========================================================================

    /// Check backend health.
    pub async fn get_health(&self) -> ApiResult<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        self.get(&url).await
    }

    /// Get the service banner (name, version, docs path).
    pub async fn get_service_info(&self) -> ApiResult<ServiceInfo> {
        let url = format!("{}/", self.base_url);
        self.get(&url).await
    }

    // =========================================================================
    // Stock endpoints
    // =========================================================================

    /// Get one page of stocks with optional search and sector filtering.
    pub async fn get_stocks(&self, params: &StockListParams) -> ApiResult<StocksResponse> {
        Self::validate_paging(params.page, params.size)?;

        let mut url = format!("{}/api/v1/stocks/", self.base_url);
        if let Some(page) = params.page {
            Self::push_query(&mut url, "page", &page.to_string());
        }
        if let Some(size) = params.size {
            Self::push_query(&mut url, "size", &size.to_string());
        }
        if let Some(search) = &params.search {
            Self::push_query(&mut url, "search", &urlencoding::encode(search));
        }
        if let Some(sector) = &params.sector {
            Self::push_query(&mut url, "sector", &urlencoding::encode(sector));
        }

        self.get(&url).await
    }

    /// Get stock details with price history over the last `days` days
    /// (backend default: 30).
    pub async fn get_stock(&self, stock_id: &str, days: Option<u32>) -> ApiResult<StockDetailResponse> {
        Self::validate_id(stock_id, "stock_id")?;
        if let Some(days) = days {
            Self::validate_days(days)?;
        }

        let mut url = format!("{}/api/v1/stocks/{}", self.base_url, urlencoding::encode(stock_id));
        if let Some(days) = days {
            Self::push_query(&mut url, "days", &days.to_string());
        }
        self.get(&url).await
    }

    /// Get stock price history with a selectable candle interval.
    pub async fn get_stock_prices(
        &self,
        stock_id: &str,
        params: &StockPricesParams,
    ) -> ApiResult<StockPricesResponse> {
        Self::validate_id(stock_id, "stock_id")?;

        let mut url = format!(
            "{}/api/v1/stocks/{}/prices",
            self.base_url,
            urlencoding::encode(stock_id)
        );
        if let Some(interval) = params.interval {
            Self::push_query(&mut url, "interval", interval.as_str());
        }
        if let Some(start) = params.start_date {
            Self::push_query(&mut url, "start_date", &urlencoding::encode(&start.to_rfc3339()));
        }
        if let Some(end) = params.end_date {
            Self::push_query(&mut url, "end_date", &urlencoding::encode(&end.to_rfc3339()));
        }
        self.get(&url).await
    }

    /// Get the latest price for a stock.
    pub async fn get_latest_stock_price(&self, stock_id: &str) -> ApiResult<StockPrice> {
        Self::validate_id(stock_id, "stock_id")?;
        let url = format!(
            "{}/api/v1/stocks/{}/latest",
            self.base_url,
            urlencoding::encode(stock_id)
        );
        self.get(&url).await
    }

    /// Get the list of all sectors across tracked stocks.
    pub async fn get_sectors(&self) -> ApiResult<SectorsResponse> {
        let url = format!("{}/api/v1/stocks/sectors/list", self.base_url);
        self.get(&url).await
    }

    // =========================================================================
    // Currency endpoints
    // =========================================================================

    /// Get one page of currency pairs with optional search.
    pub async fn get_currencies(&self, params: &CurrencyListParams) -> ApiResult<CurrenciesResponse> {
        Self::validate_paging(params.page, params.size)?;

        let mut url = format!("{}/api/v1/currencies/", self.base_url);
        if let Some(page) = params.page {
            Self::push_query(&mut url, "page", &page.to_string());
        }
        if let Some(size) = params.size {
            Self::push_query(&mut url, "size", &size.to_string());
        }
        if let Some(search) = &params.search {
            Self::push_query(&mut url, "search", &urlencoding::encode(search));
        }

        self.get(&url).await
    }

    /// Get currency rate history over an optional date range.
    pub async fn get_currency_rates(
        &self,
        currency_id: &str,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> ApiResult<CurrencyRatesResponse> {
        Self::validate_id(currency_id, "currency_id")?;

        let mut url = format!(
            "{}/api/v1/currencies/{}/rates",
            self.base_url,
            urlencoding::encode(currency_id)
        );
        if let Some(start) = start_date {
            Self::push_query(&mut url, "start_date", &urlencoding::encode(&start.to_rfc3339()));
        }
        if let Some(end) = end_date {
            Self::push_query(&mut url, "end_date", &urlencoding::encode(&end.to_rfc3339()));
        }
        self.get(&url).await
    }

    /// Get the latest rate for a currency pair.
    pub async fn get_latest_currency_rate(&self, currency_id: &str) -> ApiResult<CurrencyRate> {
        Self::validate_id(currency_id, "currency_id")?;
        let url = format!(
            "{}/api/v1/currencies/{}/latest",
            self.base_url,
            urlencoding::encode(currency_id)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Data management endpoints
    // =========================================================================

    /// Get data-collection status (counts, sources, last update).
    pub async fn get_data_status(&self) -> ApiResult<DataStatus> {
        let url = format!("{}/api/v1/data/status", self.base_url);
        self.get(&url).await
    }

    /// Get per-service health of the data-collection pipeline.
    pub async fn get_data_health(&self) -> ApiResult<DataHealth> {
        let url = format!("{}/api/v1/data/health", self.base_url);
        self.get(&url).await
    }

    /// Manually trigger a stock data refresh.
    pub async fn refresh_stocks(&self) -> ApiResult<RefreshResponse> {
        let url = format!("{}/api/v1/data/refresh/stocks", self.base_url);
        self.post(&url).await
    }

    /// Manually trigger a currency data refresh.
    pub async fn refresh_currencies(&self) -> ApiResult<RefreshResponse> {
        let url = format!("{}/api/v1/data/refresh/currencies", self.base_url);
        self.post(&url).await
    }
}
