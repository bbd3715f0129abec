//! Cross-crate traits.

pub mod channel;

pub use channel::NotificationChannel;
