//! Notification channel trait for pluggable delivery backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::alert::VisaAlert;

/// Trait for notification delivery backends.
///
/// Implementations exist for SMTP email, the Telegram Bot API, and the
/// in-app notification log. The [`NotificationChannel`] trait is defined
/// here in `visadesk-core` and implemented in `visadesk-notify`.
///
/// A channel receives a fully-formed [`VisaAlert`] and either delivers it
/// or returns an error. Errors are captured per channel by the dispatcher;
/// a failing channel must never poison the others.
#[async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug + 'static {
    /// Return the channel name (e.g., "email", "telegram", "inapp").
    fn name(&self) -> &str;

    /// Deliver the alert.
    async fn send(&self, alert: &VisaAlert) -> AppResult<()>;
}
