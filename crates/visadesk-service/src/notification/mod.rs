//! In-app notification log access.

pub mod service;

pub use service::NotificationService;
