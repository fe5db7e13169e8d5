//! REST API client module for TRIZ Trade.
//!
//! This module provides a type-safe HTTP client for interacting with
//! the TRIZ Trade REST API for stocks, currencies, price history, and
//! data-collection management.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use triztrade::api::{StockListParams, TrizApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings
//!     let client = TrizApiClient::new("https://api.triztrade.dev")?;
//!
//!     // List stocks
//!     let page = client.get_stocks(&StockListParams::new()).await?;
//!     println!("Found {} stocks", page.total);
//!
//!     // Fetch a detail view with 7 days of history
//!     let detail = client.get_stock("thyao", Some(7)).await?;
//!     println!("{}: {:.2}", detail.stock.symbol, detail.stock.price);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use triztrade::api::{RetryConfig, TrizApiClient};
//!
//! let client = TrizApiClient::builder("https://api.triztrade.dev")
//!     .timeout(Duration::from_secs(60))
//!     .header("X-Custom-Header", "value")
//!     .with_retry(RetryConfig::new(3))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//! The [`ApiError`] enum covers all possible error cases:
//!
//! ```rust,ignore
//! use triztrade::api::{ApiError, TrizApiClient};
//!
//! match client.get_stock("unknown", None).await {
//!     Ok(detail) => println!("Found {}", detail.stock.symbol),
//!     Err(ApiError::NotFound(msg)) => println!("Stock not found: {}", msg),
//!     Err(ApiError::InvalidParameter(msg)) => println!("Invalid request: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{RetryConfig, TrizApiClient, TrizApiClientBuilder};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use types::*;
