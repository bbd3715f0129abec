//! Employee CRUD and the renewal reset rule.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing;
use uuid::Uuid;

use visadesk_core::error::AppError;
use visadesk_core::result::AppResult;
use visadesk_core::types::pagination::{PageRequest, PageResponse};
use visadesk_database::repositories::employee::EmployeeRepository;
use visadesk_entity::employee::model::{CreateEmployee, Employee, UpdateEmployee};

/// Manages employee records.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    repo: Arc<EmployeeRepository>,
}

/// Whether an expiry-date change starts a fresh notification cycle.
///
/// Moving the date later (a renewal) or setting a date where none was
/// tracked clears stale markers; moving it earlier or leaving it unchanged
/// keeps them, so already-sent reminders stay sent.
pub fn is_renewal(old: Option<NaiveDate>, new: Option<NaiveDate>) -> bool {
    match (old, new) {
        (Some(old), Some(new)) => new > old,
        (None, Some(_)) => true,
        _ => false,
    }
}

impl EmployeeService {
    /// Create a new employee service.
    pub fn new(repo: Arc<EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// List employees.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Employee>> {
        self.repo.find_page(&page).await
    }

    /// Fetch one employee.
    pub async fn get(&self, id: Uuid) -> AppResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
    }

    /// Create an employee.
    pub async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        let employee = self.repo.create(&data).await?;
        tracing::info!(employee = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Update an employee, resetting the notification cycle on renewal.
    pub async fn update(&self, id: Uuid, update: UpdateEmployee) -> AppResult<Employee> {
        let mut employee = self.get(id).await?;

        if let Some(name) = update.name {
            employee.name = name;
        }
        if let Some(email) = update.email {
            employee.email = email;
        }
        if let Some(company_name) = update.company_name {
            employee.company_name = company_name;
        }
        if let Some(position) = update.position {
            employee.position = Some(position);
        }
        if let Some(is_active) = update.is_active {
            employee.is_active = is_active;
        }
        if let Some(new_expiry) = update.visa_expiry_date {
            if is_renewal(employee.visa_expiry_date, new_expiry) {
                tracing::info!(
                    employee = %employee.id,
                    "Visa renewed; notification cycle reset"
                );
                employee.notification_state.0.reset();
            }
            employee.visa_expiry_date = new_expiry;
        }

        self.repo.update(&employee).await
    }

    /// Delete an employee.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(format!("Employee {id} not found")));
        }
        tracing::info!(employee = %id, "Employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn later_date_is_a_renewal() {
        assert!(is_renewal(date(2024, 1, 1), date(2025, 1, 1)));
    }

    #[test]
    fn earlier_or_unchanged_date_is_not() {
        assert!(!is_renewal(date(2024, 6, 1), date(2024, 1, 1)));
        assert!(!is_renewal(date(2024, 6, 1), date(2024, 6, 1)));
    }

    #[test]
    fn setting_a_first_date_starts_a_fresh_cycle() {
        assert!(is_renewal(None, date(2024, 6, 1)));
        assert!(!is_renewal(date(2024, 6, 1), None));
        assert!(!is_renewal(None, None));
    }
}
