//! SMTP email channel.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use visadesk_core::config::channels::EmailConfig;
use visadesk_core::error::AppError;
use visadesk_core::result::AppResult;
use visadesk_core::traits::channel::NotificationChannel;
use visadesk_core::types::alert::VisaAlert;

/// Delivers alerts to the employee's email address over SMTP.
pub struct EmailChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for EmailChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailChannel").field("from", &self.from).finish()
    }
}

impl EmailChannel {
    /// Build the channel from configuration.
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| AppError::configuration(format!("Invalid sender address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| AppError::configuration(format!("Invalid SMTP relay: {e}")))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    async fn send(&self, alert: &VisaAlert) -> AppResult<()> {
        let to: Mailbox = alert.employee_email.parse().map_err(|e| {
            AppError::validation(format!(
                "Invalid recipient address '{}': {e}",
                alert.employee_email
            ))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&alert.title)
            .body(alert.body.clone())
            .map_err(|e| AppError::internal(format!("Failed to build email: {e}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::external_service(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}
