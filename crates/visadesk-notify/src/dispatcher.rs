//! Fans one alert out to every enabled channel.

use std::sync::Arc;

use serde::Serialize;
use tracing;

use visadesk_core::traits::channel::NotificationChannel;
use visadesk_core::types::alert::VisaAlert;

/// A single channel's failure to deliver an alert.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelFailure {
    /// Channel name.
    pub channel: String,
    /// Error message.
    pub error: String,
}

/// The result of dispatching one alert across all channels.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchOutcome {
    /// How many channels were attempted.
    pub attempted: usize,
    /// How many channels delivered successfully.
    pub delivered: usize,
    /// Per-channel failures.
    pub failures: Vec<ChannelFailure>,
}

/// Dispatches alerts to a configured set of channels.
///
/// Every channel is invoked for every alert; a channel error is captured
/// and logged, never propagated. One recipient's SMTP failure must not
/// block the Telegram post or the in-app entry, and must not abort the
/// sweep of the remaining employees.
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    channels: Vec<Arc<dyn NotificationChannel>>,
}

impl ChannelDispatcher {
    /// Create a dispatcher over the given channels.
    pub fn new(channels: Vec<Arc<dyn NotificationChannel>>) -> Self {
        Self { channels }
    }

    /// Number of configured channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Deliver the alert on every channel, collecting failures.
    pub async fn dispatch(&self, alert: &VisaAlert) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        for channel in &self.channels {
            outcome.attempted += 1;
            match channel.send(alert).await {
                Ok(()) => {
                    outcome.delivered += 1;
                    tracing::debug!(
                        channel = channel.name(),
                        employee = %alert.employee_id,
                        "Alert delivered"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        channel = channel.name(),
                        employee = %alert.employee_id,
                        error = %e,
                        "Channel delivery failed"
                    );
                    outcome.failures.push(ChannelFailure {
                        channel: channel.name().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;
    use visadesk_core::error::AppError;
    use visadesk_core::result::AppResult;
    use visadesk_core::types::alert::AlertSeverity;

    #[derive(Debug)]
    struct StubChannel {
        name: &'static str,
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubChannel {
        fn new(name: &'static str, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                name,
                fail,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl NotificationChannel for StubChannel {
        fn name(&self) -> &str {
            self.name
        }

        async fn send(&self, _alert: &VisaAlert) -> AppResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AppError::external_service("relay refused"))
            } else {
                Ok(())
            }
        }
    }

    fn alert() -> VisaAlert {
        VisaAlert {
            employee_id: Uuid::new_v4(),
            employee_name: "Timur Akhmedov".to_string(),
            employee_email: "timur@example.com".to_string(),
            company_name: "Acme Logistics".to_string(),
            days_remaining: 7,
            title: "Visa expires in 7 days: Timur Akhmedov".to_string(),
            body: "…".to_string(),
            severity: AlertSeverity::Warning,
        }
    }

    #[tokio::test]
    async fn failing_channel_does_not_block_the_rest() {
        let good_before = StubChannel::new("email", false);
        let bad = StubChannel::new("telegram", true);
        let good_after = StubChannel::new("inapp", false);

        let dispatcher = ChannelDispatcher::new(vec![
            good_before.clone(),
            bad.clone(),
            good_after.clone(),
        ]);

        let outcome = dispatcher.dispatch(&alert()).await;

        assert_eq!(outcome.attempted, 3);
        assert_eq!(outcome.delivered, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].channel, "telegram");
        assert_eq!(good_after.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn second_dispatch_is_unaffected_by_prior_failure() {
        let bad = StubChannel::new("email", true);
        let good = StubChannel::new("inapp", false);
        let dispatcher = ChannelDispatcher::new(vec![bad.clone(), good.clone()]);

        dispatcher.dispatch(&alert()).await;
        let second = dispatcher.dispatch(&alert()).await;

        assert_eq!(second.delivered, 1);
        assert_eq!(good.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_channel_set_is_a_noop() {
        let dispatcher = ChannelDispatcher::new(vec![]);
        let outcome = dispatcher.dispatch(&alert()).await;
        assert_eq!(outcome.attempted, 0);
        assert!(outcome.failures.is_empty());
    }
}
