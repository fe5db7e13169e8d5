//! # TRIZ Trade Rust SDK
//!
//! A Rust SDK for the TRIZ Trade financial data platform (BIST stocks and
//! currency rates).
//!
//! ## Modules
//!
//! This SDK provides two main modules:
//! - [`api`]: REST API client for stocks, currencies, and data-collection status
//! - [`resource`]: view-state layer that owns `{data, loading, error}` per
//!   dashboard resource and drives fetches off parameter changes
//!
//! Plus:
//! - [`network`]: endpoint URL constants
//!
//! ## Quick Start - REST API
//!
//! ```rust,ignore
//! use triztrade::api::{StockListParams, TrizApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TrizApiClient::new("https://api.triztrade.dev")?;
//!
//!     // List stocks with pagination and search
//!     let params = StockListParams::new().with_page(1).with_search("THY");
//!     let page = client.get_stocks(&params).await?;
//!     println!("{} of {} stocks", page.stocks.len(), page.total);
//!
//!     // Data collection status
//!     let status = client.get_data_status().await?;
//!     println!("tracking {} stocks", status.stocks_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start - View State
//!
//! ```rust,ignore
//! use triztrade::api::{StockListParams, TrizApiClient};
//! use triztrade::resource::StocksView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TrizApiClient::new("https://api.triztrade.dev")?;
//!     let mut view = StocksView::new(client);
//!
//!     view.sync(StockListParams::new().with_page(1)).await;
//!     if let Some(err) = view.error() {
//!         eprintln!("fetch failed: {err}");
//!     } else {
//!         for stock in view.stocks() {
//!             println!("{}  {:.2}  ({:+.2}%)", stock.symbol, stock.price, stock.change_percent);
//!         }
//!     }
//!
//!     // A repeated tuple is a no-op; a changed one refetches.
//!     view.sync(StockListParams::new().with_page(2)).await;
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for stocks, currencies, and data status.
pub mod api;

/// Network URL constants.
pub mod network;

/// View-state layer: per-resource fetch state for dashboard consumers.
pub mod resource;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use triztrade::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        ApiError, ApiResult, ErrorResponse, RetryConfig, TrizApiClient, TrizApiClientBuilder,
        // Common types
        CurrenciesResponse, Currency, CurrencyListParams, CurrencyRate, CurrencyRatesResponse,
        DataHealth, DataStatus, HealthResponse, Interval, RefreshResponse, SectorsResponse,
        ServiceInfo, Stock, StockDetailResponse, StockListParams, StockPrice, StockPricesParams,
        StockPricesResponse, StocksResponse,
    };

    // Network constants
    pub use crate::network::DEFAULT_API_URL;

    // View-state layer exports
    pub use crate::resource::{
        ApiSource, CallFailure, CurrenciesView, Envelope, FetchState, HealthView, SourceResult,
        StatusView, StocksView,
    };
}
