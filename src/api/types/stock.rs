//! Stock-related types for the TRIZ Trade REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Candle interval for stock price history.
///
/// Matches the intervals accepted by GET /api/v1/stocks/{id}/prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// One minute
    #[serde(rename = "1m")]
    OneMinute,
    /// Five minutes
    #[serde(rename = "5m")]
    FiveMinutes,
    /// Fifteen minutes
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// Thirty minutes
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// One hour
    #[serde(rename = "1h")]
    OneHour,
    /// One day
    #[default]
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    /// String form used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneHour => "1h",
            Interval::OneDay => "1d",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked BIST stock with its latest quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    /// Stock identifier
    pub id: String,
    /// Ticker symbol (e.g. "THYAO")
    pub symbol: String,
    /// Company name
    pub name: String,
    /// Business sector
    pub sector: String,
    /// Last traded price
    pub price: f64,
    /// Price change since previous close
    pub change: f64,
    /// Percentage change since previous close
    pub change_percent: f64,
    /// Trading volume
    pub volume: u64,
    /// Market capitalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    /// Quote timestamp
    pub last_update: DateTime<Utc>,
}

/// A single stock price history point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPrice {
    /// Observation timestamp
    pub timestamp: DateTime<Utc>,
    /// Price at the observation
    pub price: f64,
    /// Change against the previous observation
    pub change: f64,
    /// Percentage change against the previous observation
    pub change_percent: f64,
    /// Trading volume over the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    /// Open price over the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    /// High price over the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    /// Low price over the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Close price over the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
}

/// Query parameters for GET /api/v1/stocks/.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockListParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size (1-100)
    pub size: Option<u32>,
    /// Free-text search over symbol and name
    pub search: Option<String>,
    /// Sector filter
    pub sector: Option<String>,
}

impl StockListParams {
    /// Create empty params (backend defaults: page 1, size 20).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the search string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the sector filter.
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }
}

/// Query parameters for GET /api/v1/stocks/{id}/prices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockPricesParams {
    /// Candle interval (backend default: 1d)
    pub interval: Option<Interval>,
    /// Range start (backend default: 30 days back)
    pub start_date: Option<DateTime<Utc>>,
    /// Range end (backend default: now)
    pub end_date: Option<DateTime<Utc>>,
}

impl StockPricesParams {
    /// Create empty params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candle interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the date range.
    pub fn with_date_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

/// Response for GET /api/v1/stocks/.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StocksResponse {
    /// One page of stocks
    pub stocks: Vec<Stock>,
    /// Total count across all pages
    pub total: u64,
    /// Echoed page number
    pub page: u32,
    /// Echoed page size
    pub size: u32,
}

/// Response for GET /api/v1/stocks/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDetailResponse {
    /// Stock with its latest quote
    pub stock: Stock,
    /// Price history over the requested window
    pub price_history: Vec<StockPrice>,
}

/// Response for GET /api/v1/stocks/{id}/prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPricesResponse {
    /// Stock identifier
    pub stock_id: String,
    /// Interval used
    pub interval: String,
    /// Range start
    pub start_date: DateTime<Utc>,
    /// Range end
    pub end_date: DateTime<Utc>,
    /// Price points, oldest first
    pub prices: Vec<StockPrice>,
}

/// Response for GET /api/v1/stocks/sectors/list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorsResponse {
    /// Distinct sectors across tracked stocks
    pub sectors: Vec<String>,
}
