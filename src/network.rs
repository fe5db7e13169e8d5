//! Network URL constants for the TRIZ Trade SDK.

/// Default REST API base URL for TRIZ Trade.
pub const DEFAULT_API_URL: &str = "https://api.triztrade.dev";
