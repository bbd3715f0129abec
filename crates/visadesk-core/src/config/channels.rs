//! Notification channel configuration.

use serde::{Deserialize, Serialize};

/// Configuration for all notification channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsConfig {
    /// Email (SMTP) channel settings.
    #[serde(default)]
    pub email: EmailConfig,
    /// Telegram Bot API channel settings.
    #[serde(default)]
    pub telegram: TelegramConfig,
    /// In-app notification log settings.
    #[serde(default)]
    pub inapp: InAppConfig,
}

/// SMTP email channel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether the email channel is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay hostname.
    #[serde(default)]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// Sender address, e.g. `"VisaDesk <alerts@example.com>"`.
    #[serde(default)]
    pub from: String,
}

/// Telegram Bot API channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Whether the Telegram channel is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Bot token issued by BotFather.
    #[serde(default)]
    pub bot_token: String,
    /// Target chat or channel ID.
    #[serde(default)]
    pub chat_id: String,
    /// API base URL, overridable for tests.
    #[serde(default = "default_telegram_api_base")]
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bot_token: String::new(),
            chat_id: String::new(),
            api_base: default_telegram_api_base(),
        }
    }
}

/// In-app notification log channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InAppConfig {
    /// Whether sweep alerts are written to the in-app notification log.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for InAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_true() -> bool {
    true
}
