//! Visa-expiry sweep configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the expiry notification sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Shared secret required by the HTTP trigger endpoints
    /// (`Authorization: Bearer <cron_secret>`).
    pub cron_secret: String,
    /// Day window counted as "expiring soon" in the statistics view.
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,
    /// Built-in schedule settings.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Built-in cron schedule for running the sweep in-process.
///
/// Disabled by default: the primary trigger is an external cron caller
/// hitting the HTTP endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Whether the in-process schedule is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Six-field cron expression (seconds first).
    #[serde(default = "default_cron")]
    pub cron: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cron: default_cron(),
        }
    }
}

fn default_expiring_soon_days() -> i64 {
    30
}

fn default_cron() -> String {
    // Daily at 08:00
    "0 0 8 * * *".to_string()
}
