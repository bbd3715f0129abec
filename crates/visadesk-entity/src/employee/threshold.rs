//! Reminder threshold enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use visadesk_core::types::alert::AlertSeverity;

/// A reminder boundary on the road to visa expiry.
///
/// Day-count thresholds fire once each as the expiry date approaches;
/// `Expired` is the terminal bucket reached when the date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// 60 days before expiry.
    Days60,
    /// 30 days before expiry.
    Days30,
    /// 15 days before expiry.
    Days15,
    /// 7 days before expiry.
    Days7,
    /// 1 day before expiry.
    Days1,
    /// The expiry date has passed.
    Expired,
}

impl Threshold {
    /// Day-count thresholds in descending order (farthest boundary first).
    pub const DAY_THRESHOLDS: [Threshold; 5] = [
        Threshold::Days60,
        Threshold::Days30,
        Threshold::Days15,
        Threshold::Days7,
        Threshold::Days1,
    ];

    /// Days-before-expiry boundary, `None` for the expired bucket.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Days60 => Some(60),
            Self::Days30 => Some(30),
            Self::Days15 => Some(15),
            Self::Days7 => Some(7),
            Self::Days1 => Some(1),
            Self::Expired => None,
        }
    }

    /// The nearest day-count threshold at or above the given remaining days.
    ///
    /// Returns `None` when the expiry is still beyond the widest boundary.
    /// Negative inputs classify as `Expired`.
    pub fn nearest(days_remaining: i64) -> Option<Threshold> {
        if days_remaining < 0 {
            return Some(Self::Expired);
        }
        Self::DAY_THRESHOLDS
            .iter()
            .rev()
            .copied()
            .find(|t| days_remaining <= t.days().unwrap_or(0))
    }

    /// Severity of the alert this threshold produces.
    pub fn severity(&self) -> AlertSeverity {
        match self {
            Self::Days60 | Self::Days30 => AlertSeverity::Info,
            Self::Days15 | Self::Days7 | Self::Days1 => AlertSeverity::Warning,
            Self::Expired => AlertSeverity::Critical,
        }
    }

    /// Canonical lowercase label used in state maps and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days60 => "days_60",
            Self::Days30 => "days_30",
            Self::Days15 => "days_15",
            Self::Days7 => "days_7",
            Self::Days1 => "days_1",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Threshold {
    type Err = visadesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days_60" => Ok(Self::Days60),
            "days_30" => Ok(Self::Days30),
            "days_15" => Ok(Self::Days15),
            "days_7" => Ok(Self::Days7),
            "days_1" => Ok(Self::Days1),
            "expired" => Ok(Self::Expired),
            _ => Err(visadesk_core::AppError::validation(format!(
                "Invalid threshold: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_smallest_reached_boundary() {
        assert_eq!(Threshold::nearest(60), Some(Threshold::Days60));
        assert_eq!(Threshold::nearest(45), Some(Threshold::Days60));
        assert_eq!(Threshold::nearest(30), Some(Threshold::Days30));
        assert_eq!(Threshold::nearest(25), Some(Threshold::Days30));
        assert_eq!(Threshold::nearest(15), Some(Threshold::Days15));
        assert_eq!(Threshold::nearest(7), Some(Threshold::Days7));
        assert_eq!(Threshold::nearest(1), Some(Threshold::Days1));
        assert_eq!(Threshold::nearest(0), Some(Threshold::Days1));
    }

    #[test]
    fn nearest_is_none_beyond_widest_boundary() {
        assert_eq!(Threshold::nearest(61), None);
        assert_eq!(Threshold::nearest(365), None);
    }

    #[test]
    fn negative_days_classify_as_expired() {
        assert_eq!(Threshold::nearest(-1), Some(Threshold::Expired));
        assert_eq!(Threshold::nearest(-400), Some(Threshold::Expired));
    }

    #[test]
    fn roundtrip_labels() {
        for t in Threshold::DAY_THRESHOLDS
            .iter()
            .chain(std::iter::once(&Threshold::Expired))
        {
            assert_eq!(t.as_str().parse::<Threshold>().unwrap(), *t);
        }
    }
}
