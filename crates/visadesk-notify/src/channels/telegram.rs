//! Telegram Bot API channel.

use async_trait::async_trait;
use serde_json::{Value, json};

use visadesk_core::config::channels::TelegramConfig;
use visadesk_core::error::AppError;
use visadesk_core::result::AppResult;
use visadesk_core::traits::channel::NotificationChannel;
use visadesk_core::types::alert::VisaAlert;

/// Posts alerts to a configured Telegram chat via the Bot API.
#[derive(Debug)]
pub struct TelegramChannel {
    http: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramChannel {
    /// Build the channel from configuration.
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

/// Build the `sendMessage` request body for an alert.
fn build_payload(chat_id: &str, alert: &VisaAlert) -> Value {
    json!({
        "chat_id": chat_id,
        "text": format!("{}\n\n{}", alert.title, alert.body),
        "disable_web_page_preview": true,
    })
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, alert: &VisaAlert) -> AppResult<()> {
        let payload = build_payload(&self.config.chat_id, alert);

        let response = self
            .http
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Telegram request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Telegram API returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use visadesk_core::types::alert::AlertSeverity;

    #[test]
    fn payload_carries_chat_and_rendered_text() {
        let alert = VisaAlert {
            employee_id: Uuid::new_v4(),
            employee_name: "Dana Seitkali".to_string(),
            employee_email: "dana@example.com".to_string(),
            company_name: "Acme Logistics".to_string(),
            days_remaining: 15,
            title: "Visa expires in 15 days: Dana Seitkali".to_string(),
            body: "The visa for Dana Seitkali (Acme Logistics) expires soon.".to_string(),
            severity: AlertSeverity::Warning,
        };

        let payload = build_payload("-100123", &alert);
        assert_eq!(payload["chat_id"], "-100123");
        let text = payload["text"].as_str().unwrap();
        assert!(text.starts_with("Visa expires in 15 days"));
        assert!(text.contains("Acme Logistics"));
    }
}
