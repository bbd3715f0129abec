//! Response DTOs.

use serde::{Deserialize, Serialize};

use visadesk_service::sweep::engine::SweepReport;
use visadesk_service::sweep::stats::VisaStatistics;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// Response body of the sweep trigger endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    /// Always `true` on a completed sweep.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Full sweep report.
    pub stats: SweepReport,
    /// RFC 3339 completion time.
    pub timestamp: String,
}

/// Response body of the statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Always `true`.
    pub success: bool,
    /// Current visa statistics.
    pub stats: VisaStatistics,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
