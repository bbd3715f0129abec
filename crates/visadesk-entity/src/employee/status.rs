//! Per-employee notification state map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::threshold::Threshold;

/// Delivery markers for one employee, one slot per threshold.
///
/// Each slot records when the threshold was handled (dispatched or
/// suppressed as a missed backfill). Slots are write-once: the sweep never
/// clears a marker. The only reset path is an admin renewal — moving the
/// visa expiry to a later date starts a fresh cycle.
///
/// Stored as a single JSONB column on the employee row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdState {
    /// 60-day marker.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "60")]
    pub days_60: Option<DateTime<Utc>>,
    /// 30-day marker.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "30")]
    pub days_30: Option<DateTime<Utc>>,
    /// 15-day marker.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "15")]
    pub days_15: Option<DateTime<Utc>>,
    /// 7-day marker.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "7")]
    pub days_7: Option<DateTime<Utc>>,
    /// 1-day marker.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "1")]
    pub days_1: Option<DateTime<Utc>>,
    /// Expired marker.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "expired")]
    pub expired: Option<DateTime<Utc>>,
}

impl ThresholdState {
    /// A state with no markers set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The marker slot for a threshold.
    pub fn marker(&self, threshold: Threshold) -> Option<DateTime<Utc>> {
        match threshold {
            Threshold::Days60 => self.days_60,
            Threshold::Days30 => self.days_30,
            Threshold::Days15 => self.days_15,
            Threshold::Days7 => self.days_7,
            Threshold::Days1 => self.days_1,
            Threshold::Expired => self.expired,
        }
    }

    /// Whether a threshold has already been handled.
    pub fn is_marked(&self, threshold: Threshold) -> bool {
        self.marker(threshold).is_some()
    }

    /// Set a threshold's marker. No-op if already set (markers are
    /// monotonic; the first write wins).
    pub fn mark(&mut self, threshold: Threshold, at: DateTime<Utc>) {
        let slot = match threshold {
            Threshold::Days60 => &mut self.days_60,
            Threshold::Days30 => &mut self.days_30,
            Threshold::Days15 => &mut self.days_15,
            Threshold::Days7 => &mut self.days_7,
            Threshold::Days1 => &mut self.days_1,
            Threshold::Expired => &mut self.expired,
        };
        if slot.is_none() {
            *slot = Some(at);
        }
    }

    /// Clear every marker. Used only on visa renewal.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any marker is set.
    pub fn any_marked(&self) -> bool {
        Threshold::DAY_THRESHOLDS
            .iter()
            .any(|t| self.is_marked(*t))
            || self.expired.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(s: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(s, 0).unwrap()
    }

    #[test]
    fn markers_start_empty() {
        let state = ThresholdState::empty();
        assert!(!state.any_marked());
        for t in Threshold::DAY_THRESHOLDS {
            assert!(!state.is_marked(t));
        }
        assert!(!state.is_marked(Threshold::Expired));
    }

    #[test]
    fn first_write_wins() {
        let mut state = ThresholdState::empty();
        state.mark(Threshold::Days30, ts(100));
        state.mark(Threshold::Days30, ts(200));
        assert_eq!(state.marker(Threshold::Days30), Some(ts(100)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = ThresholdState::empty();
        state.mark(Threshold::Days60, ts(1));
        state.mark(Threshold::Expired, ts(2));
        state.reset();
        assert!(!state.any_marked());
    }

    #[test]
    fn serializes_with_day_number_keys() {
        let mut state = ThresholdState::empty();
        state.mark(Threshold::Days7, ts(1_700_000_000));
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("7").is_some());
        assert!(json.get("60").is_none());

        let back: ThresholdState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn deserializes_from_empty_object() {
        let state: ThresholdState = serde_json::from_str("{}").unwrap();
        assert!(!state.any_marked());
    }
}
