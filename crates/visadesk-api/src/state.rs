//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use visadesk_core::config::AppConfig;
use visadesk_service::employee::service::EmployeeService;
use visadesk_service::notification::service::NotificationService;
use visadesk_service::sweep::engine::SweepEngine;
use visadesk_service::sweep::stats::StatisticsReporter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Employee CRUD service.
    pub employee_service: Arc<EmployeeService>,
    /// In-app notification log service.
    pub notification_service: Arc<NotificationService>,
    /// The visa-expiry sweep engine.
    pub sweep_engine: Arc<SweepEngine>,
    /// Read-side statistics reporter.
    pub statistics: Arc<StatisticsReporter>,
}
