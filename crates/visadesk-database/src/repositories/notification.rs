//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use visadesk_core::error::{AppError, ErrorKind};
use visadesk_core::result::AppResult;
use visadesk_core::types::pagination::{PageRequest, PageResponse};
use visadesk_entity::notification::model::Notification;
use visadesk_entity::notification::severity::NotificationSeverity;

/// Repository for the append-only in-app notification log.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a notification entry.
    pub async fn create(
        &self,
        category: &str,
        title: &str,
        message: &str,
        severity: NotificationSeverity,
        employee_id: Option<Uuid>,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (category, title, message, severity, employee_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(category)
        .bind(title)
        .bind(message)
        .bind(severity)
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// List notifications, newest first.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Notification>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
            })?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread notifications.
    pub async fn count_unread(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE is_read = FALSE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a notification as read.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE, read_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        Ok(())
    }

    /// Mark all notifications as read. Returns how many were updated.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE, read_at = NOW() WHERE is_read = FALSE",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }
}
