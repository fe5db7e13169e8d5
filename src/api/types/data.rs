//! Data-collection types for the TRIZ Trade REST API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for GET /api/v1/data/status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStatus {
    /// Collection status ("active" while the collector is running)
    pub status: String,
    /// When the collector last wrote data
    pub last_update: DateTime<Utc>,
    /// Number of tracked stocks
    pub stocks_count: u64,
    /// Number of tracked currency pairs
    pub currencies_count: u64,
    /// Upstream data source names
    pub data_sources: Vec<String>,
}

/// Response for GET /api/v1/data/health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataHealth {
    /// Overall health status
    pub status: String,
    /// Per-service status, keyed by service name
    pub services: HashMap<String, String>,
}

/// Response for POST /api/v1/data/refresh/{stocks,currencies}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Trigger status ("success")
    pub status: String,
}
