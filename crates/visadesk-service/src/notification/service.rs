//! Read/mark-read access to the in-app notification log.

use std::sync::Arc;

use uuid::Uuid;

use visadesk_core::result::AppResult;
use visadesk_core::types::pagination::{PageRequest, PageResponse};
use visadesk_database::repositories::notification::NotificationRepository;
use visadesk_entity::notification::model::Notification;

/// Manages the in-app notification log.
#[derive(Debug, Clone)]
pub struct NotificationService {
    repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(repo: Arc<NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Lists notifications, newest first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Notification>> {
        self.repo.find_page(&page).await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self) -> AppResult<i64> {
        self.repo.count_unread().await
    }

    /// Marks a notification as read.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        self.repo.mark_read(id).await
    }

    /// Marks all notifications as read.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        self.repo.mark_all_read().await
    }
}
