//! Currency-related types for the TRIZ Trade REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked currency pair with its latest rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// Currency pair identifier
    pub id: String,
    /// Pair symbol (e.g. "USD/TRY")
    pub symbol: String,
    /// Pair name
    pub name: String,
    /// Current exchange rate
    pub rate: f64,
    /// Rate change since previous close
    pub change: f64,
    /// Percentage change since previous close
    pub change_percent: f64,
    /// Quote timestamp
    pub last_update: DateTime<Utc>,
}

/// A single currency rate history point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Observation timestamp
    pub timestamp: DateTime<Utc>,
    /// Exchange rate at the observation
    pub rate: f64,
    /// Change against the previous observation
    pub change: f64,
    /// Percentage change against the previous observation
    pub change_percent: f64,
    /// Bid price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<f64>,
    /// Ask price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<f64>,
}

/// Query parameters for GET /api/v1/currencies/.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyListParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size (1-100)
    pub size: Option<u32>,
    /// Free-text search over symbol and name
    pub search: Option<String>,
}

impl CurrencyListParams {
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
}

/// Response for GET /api/v1/currencies/.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrenciesResponse {
    /// One page of currency pairs
    pub currencies: Vec<Currency>,
    /// Total count across all pages
    pub total: u64,
    /// Echoed page number
    pub page: u32,
    /// Echoed page size
    pub size: u32,
}

/// Response for GET /api/v1/currencies/{id}/rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRatesResponse {
    /// Currency pair identifier
    pub currency_id: String,
    /// Range start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Range end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Rate points, oldest first
    pub rates: Vec<CurrencyRate>,
}
