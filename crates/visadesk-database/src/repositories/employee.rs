//! Employee repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use visadesk_core::error::{AppError, ErrorKind};
use visadesk_core::result::AppResult;
use visadesk_core::types::pagination::{PageRequest, PageResponse};
use visadesk_entity::employee::model::{CreateEmployee, Employee};
use visadesk_entity::employee::status::ThresholdState;

/// Repository for employee CRUD and sweep queries.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List employees, newest first.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Employee>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;

        let employees = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))?;

        Ok(PageResponse::new(
            employees,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find an employee by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employee", e))
    }

    /// Insert a new employee. The notification state starts empty.
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, email, company_name, position, visa_expiry_date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.company_name)
        .bind(&data.position)
        .bind(data.visa_expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create employee", e))
    }

    /// Write back a fully-merged employee row.
    pub async fn update(&self, employee: &Employee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET name = $2, email = $3, company_name = $4, position = $5, \
             visa_expiry_date = $6, is_active = $7, notification_state = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.company_name)
        .bind(&employee.position)
        .bind(employee.visa_expiry_date)
        .bind(employee.is_active)
        .bind(&employee.notification_state)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update employee", e))
    }

    /// Delete an employee. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Load every employee eligible for the sweep: active, with a visa
    /// expiry date set. Ordered soonest-expiring first.
    pub async fn find_sweep_candidates(&self) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees \
             WHERE is_active = TRUE AND visa_expiry_date IS NOT NULL \
             ORDER BY visa_expiry_date ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load sweep candidates", e)
        })
    }

    /// Persist an employee's notification state map.
    pub async fn update_notification_state(
        &self,
        id: Uuid,
        state: &ThresholdState,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE employees SET notification_state = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(Json(state))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update notification state", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Employee {id} not found")));
        }
        Ok(())
    }
}
