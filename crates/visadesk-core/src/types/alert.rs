//! The alert payload handed to notification channels.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a visa alert, mapped by each channel to its own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Early reminder (60/30 days out).
    Info,
    /// Expiry is close (15/7/1 days out).
    Warning,
    /// The visa has already expired.
    Critical,
}

impl AlertSeverity {
    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// A fully-formed visa-expiry alert.
///
/// Built once per (employee, threshold) crossing by the sweep and passed
/// unchanged to every enabled channel. Channels treat it as an opaque
/// message plus addressing data; they never re-derive dates or thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisaAlert {
    /// Subject employee.
    pub employee_id: Uuid,
    /// Employee display name.
    pub employee_name: String,
    /// Employee email address (the email channel's recipient).
    pub employee_email: String,
    /// Employing company.
    pub company_name: String,
    /// Days until expiry at dispatch time (negative once expired).
    pub days_remaining: i64,
    /// Rendered subject line.
    pub title: String,
    /// Rendered body text.
    pub body: String,
    /// Alert severity.
    pub severity: AlertSeverity,
}
