//! Custom Axum extractors.

pub mod cron_auth;
pub mod pagination;

pub use cron_auth::CronAuth;
pub use pagination::PaginationParams;
