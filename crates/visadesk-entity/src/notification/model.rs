//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::severity::NotificationSeverity;

/// An entry in the append-only in-app notification log.
///
/// The visa sweep is one producer among several; the `category` column
/// distinguishes producers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Producer category (e.g. `visa_alert`).
    pub category: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Severity level.
    pub severity: NotificationSeverity,
    /// The employee this entry concerns (if any).
    pub employee_id: Option<Uuid>,
    /// Whether the entry has been read.
    pub is_read: bool,
    /// When the entry was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
