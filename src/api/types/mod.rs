//! API response and request types for the TRIZ Trade REST API.
//!
//! Types are grouped by entity family, one module per family:
//! - [`health`]: service health and root info
//! - [`stock`]: stocks, price history, sectors
//! - [`currency`]: currency pairs and rate history
//! - [`data`]: data-collection status and refresh triggers

pub mod currency;
pub mod data;
pub mod health;
pub mod stock;

pub use currency::*;
pub use data::*;
pub use health::*;
pub use stock::*;
