//! Notification severity enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use visadesk_core::types::alert::AlertSeverity;

/// Severity of an in-app notification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    /// Informational entry.
    Info,
    /// Needs attention soon.
    Warning,
    /// Something completed successfully.
    Success,
    /// Something failed or lapsed.
    Error,
}

impl NotificationSeverity {
    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl From<AlertSeverity> for NotificationSeverity {
    fn from(severity: AlertSeverity) -> Self {
        match severity {
            AlertSeverity::Info => Self::Info,
            AlertSeverity::Warning => Self::Warning,
            AlertSeverity::Critical => Self::Error,
        }
    }
}

impl fmt::Display for NotificationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationSeverity {
    type Err = visadesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            _ => Err(visadesk_core::AppError::validation(format!(
                "Invalid severity: '{s}'. Expected one of: info, warning, success, error"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "warning".parse::<NotificationSeverity>().unwrap(),
            NotificationSeverity::Warning
        );
        assert!("fatal".parse::<NotificationSeverity>().is_err());
    }

    #[test]
    fn alert_severity_maps_critical_to_error() {
        assert_eq!(
            NotificationSeverity::from(AlertSeverity::Critical),
            NotificationSeverity::Error
        );
        assert_eq!(
            NotificationSeverity::from(AlertSeverity::Info),
            NotificationSeverity::Info
        );
    }
}
