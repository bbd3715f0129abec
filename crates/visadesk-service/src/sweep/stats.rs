//! Read-side statistics over the tracked employee set.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use visadesk_core::result::AppResult;
use visadesk_database::repositories::employee::EmployeeRepository;
use visadesk_entity::employee::model::Employee;

/// Dashboard counts over active, dated employees.
///
/// Pure day-math: delivery markers are neither consulted nor mutated, so
/// these counts are independent of what the sweep has already sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisaStatistics {
    /// Employees with `0 < days_remaining <= window`.
    pub expiring_soon: u64,
    /// Employees with `days_remaining <= 0`.
    pub expired: u64,
    /// Active employees with an expiry date set.
    pub total_tracked: u64,
    /// When these counts were computed.
    pub last_updated: DateTime<Utc>,
}

/// Compute statistics from an employee set.
pub fn compute_statistics(
    employees: &[Employee],
    today: NaiveDate,
    window_days: i64,
) -> VisaStatistics {
    let mut stats = VisaStatistics {
        expiring_soon: 0,
        expired: 0,
        total_tracked: 0,
        last_updated: Utc::now(),
    };

    for employee in employees {
        if !employee.is_active {
            continue;
        }
        let Some(days) = employee.days_remaining(today) else {
            continue;
        };
        stats.total_tracked += 1;
        if days <= 0 {
            stats.expired += 1;
        } else if days <= window_days {
            stats.expiring_soon += 1;
        }
    }

    stats
}

/// Recomputes visa statistics on demand for the dashboard endpoint.
#[derive(Debug, Clone)]
pub struct StatisticsReporter {
    employee_repo: Arc<EmployeeRepository>,
    window_days: i64,
}

impl StatisticsReporter {
    /// Create a new reporter.
    pub fn new(employee_repo: Arc<EmployeeRepository>, window_days: i64) -> Self {
        Self {
            employee_repo,
            window_days,
        }
    }

    /// Scan the tracked employees and compute fresh counts.
    pub async fn report(&self) -> AppResult<VisaStatistics> {
        let employees = self.employee_repo.find_sweep_candidates().await?;
        Ok(compute_statistics(
            &employees,
            Utc::now().date_naive(),
            self.window_days,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sqlx::types::Json;
    use uuid::Uuid;
    use visadesk_entity::employee::status::ThresholdState;
    use visadesk_entity::employee::threshold::Threshold;

    fn employee(days_out: Option<i64>, active: bool, today: NaiveDate) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            company_name: "Acme".to_string(),
            position: None,
            visa_expiry_date: days_out.map(|d| today + Duration::days(d)),
            is_active: active,
            notification_state: Json(ThresholdState::empty()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn counts_split_by_day_window() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let employees = vec![
            employee(Some(10), true, today),  // expiring soon
            employee(Some(30), true, today),  // expiring soon (boundary inclusive)
            employee(Some(31), true, today),  // tracked only
            employee(Some(0), true, today),   // expired (boundary inclusive)
            employee(Some(-5), true, today),  // expired
            employee(None, true, today),      // not tracked
            employee(Some(5), false, today),  // inactive, ignored
        ];

        let stats = compute_statistics(&employees, today, 30);
        assert_eq!(stats.expiring_soon, 2);
        assert_eq!(stats.expired, 2);
        assert_eq!(stats.total_tracked, 5);
    }

    #[test]
    fn counts_ignore_delivery_markers() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut notified = employee(Some(10), true, today);
        notified
            .notification_state
            .0
            .mark(Threshold::Days15, Utc::now());

        let stats = compute_statistics(&[notified], today, 30);
        assert_eq!(stats.expiring_soon, 1);
    }
}
