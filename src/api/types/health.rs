//! Service health types for the TRIZ Trade REST API.

use serde::{Deserialize, Serialize};

/// Response for GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status ("healthy" when the service is up)
    pub status: String,
    /// Service identifier
    pub service: String,
    /// Backend version
    pub version: String,
}

impl HealthResponse {
    /// Whether the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Response for GET / (service banner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service banner message
    pub message: String,
    /// Backend version
    pub version: String,
    /// Service status ("active")
    pub status: String,
    /// Path to the interactive API docs
    pub docs: String,
}
