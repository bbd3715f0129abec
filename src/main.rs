//! VisaDesk Server — employee visa-expiry tracking and notification.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use visadesk_core::config::AppConfig;
use visadesk_core::error::AppError;
use visadesk_core::traits::channel::NotificationChannel;

#[tokio::main]
async fn main() {
    let env = std::env::var("VISADESK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VisaDesk v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = visadesk_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    visadesk_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let employee_repo = Arc::new(
        visadesk_database::repositories::employee::EmployeeRepository::new(db_pool.clone()),
    );
    let notification_repo = Arc::new(
        visadesk_database::repositories::notification::NotificationRepository::new(db_pool.clone()),
    );

    // ── Step 3: Notification channels ────────────────────────────
    let mut channels: Vec<Arc<dyn NotificationChannel>> = Vec::new();

    if config.channels.email.enabled {
        let email = visadesk_notify::channels::email::EmailChannel::new(&config.channels.email)?;
        channels.push(Arc::new(email));
        tracing::info!("Email channel enabled");
    }
    if config.channels.telegram.enabled {
        let telegram = visadesk_notify::channels::telegram::TelegramChannel::new(
            config.channels.telegram.clone(),
        );
        channels.push(Arc::new(telegram));
        tracing::info!("Telegram channel enabled");
    }
    if config.channels.inapp.enabled {
        let inapp =
            visadesk_notify::channels::inapp::InAppChannel::new(Arc::clone(&notification_repo));
        channels.push(Arc::new(inapp));
        tracing::info!("In-app channel enabled");
    }
    if channels.is_empty() {
        tracing::warn!("No notification channels enabled; sweeps will only set markers");
    }

    let dispatcher = Arc::new(visadesk_notify::dispatcher::ChannelDispatcher::new(
        channels,
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let sweep_engine = Arc::new(visadesk_service::sweep::engine::SweepEngine::new(
        Arc::clone(&employee_repo),
        Arc::clone(&dispatcher),
        config.sweep.expiring_soon_days,
    ));
    let statistics = Arc::new(visadesk_service::sweep::stats::StatisticsReporter::new(
        Arc::clone(&employee_repo),
        config.sweep.expiring_soon_days,
    ));
    let employee_service = Arc::new(visadesk_service::employee::service::EmployeeService::new(
        Arc::clone(&employee_repo),
    ));
    let notification_service = Arc::new(
        visadesk_service::notification::service::NotificationService::new(Arc::clone(
            &notification_repo,
        )),
    );

    // ── Step 5: Optional in-process schedule ─────────────────────
    let mut scheduler = if config.sweep.schedule.enabled {
        let scheduler = visadesk_worker::scheduler::SweepScheduler::new(
            Arc::clone(&sweep_engine),
            config.sweep.schedule.clone(),
        )
        .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("In-process sweep schedule disabled");
        None
    };

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = visadesk_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        employee_service,
        notification_service,
        sweep_engine,
        statistics,
    };

    let app = visadesk_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("VisaDesk server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 7: Stop background tasks ────────────────────────────
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("VisaDesk server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
