//! Channel implementations behind the core `NotificationChannel` trait.

pub mod email;
pub mod inapp;
pub mod telegram;

pub use email::EmailChannel;
pub use inapp::InAppChannel;
pub use telegram::TelegramChannel;
