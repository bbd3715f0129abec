//! In-app notification log channel.

use std::sync::Arc;

use async_trait::async_trait;

use visadesk_core::result::AppResult;
use visadesk_core::traits::channel::NotificationChannel;
use visadesk_core::types::alert::VisaAlert;
use visadesk_database::repositories::notification::NotificationRepository;

/// Category tag written by the sweep into the notification log.
pub const VISA_ALERT_CATEGORY: &str = "visa_alert";

/// Writes alerts into the in-app notification log.
#[derive(Debug)]
pub struct InAppChannel {
    repo: Arc<NotificationRepository>,
}

impl InAppChannel {
    /// Build the channel over the notification repository.
    pub fn new(repo: Arc<NotificationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NotificationChannel for InAppChannel {
    fn name(&self) -> &str {
        "inapp"
    }

    async fn send(&self, alert: &VisaAlert) -> AppResult<()> {
        self.repo
            .create(
                VISA_ALERT_CATEGORY,
                &alert.title,
                &alert.body,
                alert.severity.into(),
                Some(alert.employee_id),
            )
            .await?;
        Ok(())
    }
}
