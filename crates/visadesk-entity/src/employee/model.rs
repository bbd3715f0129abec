//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::status::ThresholdState;

/// An employee whose visa expiry is tracked.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Employing company.
    pub company_name: String,
    /// Job title (optional).
    pub position: Option<String>,
    /// Visa expiry date; employees without one are not swept.
    pub visa_expiry_date: Option<NaiveDate>,
    /// Whether the employee is active. Inactive employees are not swept.
    pub is_active: bool,
    /// Per-threshold delivery markers.
    pub notification_state: Json<ThresholdState>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Calendar days from `today` until the visa expires.
    ///
    /// Negative once the date has passed; `None` when no date is set.
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.visa_expiry_date
            .map(|expiry| (expiry - today).num_days())
    }

    /// Whether this employee is eligible for the sweep.
    pub fn is_swept(&self) -> bool {
        self.is_active && self.visa_expiry_date.is_some()
    }
}

/// Data required to create a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// Full display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Employing company.
    pub company_name: String,
    /// Job title (optional).
    pub position: Option<String>,
    /// Visa expiry date (optional).
    pub visa_expiry_date: Option<NaiveDate>,
}

/// Data for updating an existing employee.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New employing company.
    pub company_name: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New visa expiry date. `Some(None)` clears the date.
    pub visa_expiry_date: Option<Option<NaiveDate>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(expiry: Option<NaiveDate>, active: bool) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Aigerim Bekova".to_string(),
            email: "aigerim@example.com".to_string(),
            company_name: "Acme Logistics".to_string(),
            position: Some("Dispatcher".to_string()),
            visa_expiry_date: expiry,
            is_active: active,
            notification_state: Json(ThresholdState::empty()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn days_remaining_spans_the_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let emp = employee(NaiveDate::from_ymd_opt(2024, 1, 31), true);
        assert_eq!(emp.days_remaining(today), Some(30));

        let past = employee(NaiveDate::from_ymd_opt(2023, 12, 31), true);
        assert_eq!(past.days_remaining(today), Some(-1));
    }

    #[test]
    fn sweep_eligibility_requires_date_and_active_flag() {
        assert!(employee(NaiveDate::from_ymd_opt(2024, 2, 1), true).is_swept());
        assert!(!employee(None, true).is_swept());
        assert!(!employee(NaiveDate::from_ymd_opt(2024, 2, 1), false).is_swept());
    }
}
