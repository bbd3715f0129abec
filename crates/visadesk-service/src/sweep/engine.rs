//! The sweep engine: load, classify, dispatch, persist.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing;

use visadesk_core::result::AppResult;
use visadesk_database::repositories::employee::EmployeeRepository;
use visadesk_entity::employee::model::Employee;
use visadesk_notify::dispatcher::ChannelDispatcher;
use visadesk_notify::message::build_alert;

use super::classifier::{apply_plan, plan_employee};
use super::stats::{VisaStatistics, compute_statistics};

/// Outcome of one sweep invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Employees examined (active, with an expiry date).
    pub examined: u64,
    /// Notifications dispatched (one per fired threshold).
    pub dispatched: u64,
    /// Missed thresholds marked without dispatch.
    pub suppressed: u64,
    /// Employees whose reached boundary was already handled.
    pub already_handled: u64,
    /// Individual channel delivery failures across all dispatches.
    pub channel_failures: u64,
    /// Marker writes that failed after dispatch (at-least-once risk).
    pub state_write_failures: u64,
    /// Employees skipped because processing raised an error.
    pub employee_errors: u64,
    /// Statistics snapshot over the same employee set.
    pub statistics: VisaStatistics,
}

/// What happened for a single employee.
enum EmployeeOutcome {
    /// A threshold fired.
    Dispatched {
        suppressed: u64,
        channel_failures: u64,
        write_failed: bool,
    },
    /// No boundary reached, or the reached boundary was already marked.
    Quiet,
}

/// Runs the visa-expiry notification sweep.
///
/// One invocation per trigger; employees are processed sequentially and
/// failures are isolated per employee. There is no internal queue and no
/// retry: the caller re-invokes on failure, which is safe because the
/// per-threshold markers make dispatch idempotent. Two overlapping
/// invocations can race on marker read-then-write and duplicate a send;
/// tolerated for a low-volume HR job rather than prevented with locking.
#[derive(Debug, Clone)]
pub struct SweepEngine {
    employee_repo: Arc<EmployeeRepository>,
    dispatcher: Arc<ChannelDispatcher>,
    expiring_soon_days: i64,
}

impl SweepEngine {
    /// Create a new sweep engine.
    pub fn new(
        employee_repo: Arc<EmployeeRepository>,
        dispatcher: Arc<ChannelDispatcher>,
        expiring_soon_days: i64,
    ) -> Self {
        Self {
            employee_repo,
            dispatcher,
            expiring_soon_days,
        }
    }

    /// Execute one full sweep.
    ///
    /// A failure to load the employee set aborts the sweep before any
    /// writes; everything after that point is per-employee best-effort.
    pub async fn run(&self) -> AppResult<SweepReport> {
        let today = Utc::now().date_naive();
        let candidates = self.employee_repo.find_sweep_candidates().await?;

        tracing::info!(candidates = candidates.len(), "Starting visa-expiry sweep");

        let mut report = SweepReport {
            examined: 0,
            dispatched: 0,
            suppressed: 0,
            already_handled: 0,
            channel_failures: 0,
            state_write_failures: 0,
            employee_errors: 0,
            statistics: compute_statistics(&candidates, today, self.expiring_soon_days),
        };

        for employee in &candidates {
            report.examined += 1;
            match self.process_employee(employee, today).await {
                Ok(EmployeeOutcome::Dispatched {
                    suppressed,
                    channel_failures,
                    write_failed,
                }) => {
                    report.dispatched += 1;
                    report.suppressed += suppressed;
                    report.channel_failures += channel_failures;
                    if write_failed {
                        report.state_write_failures += 1;
                    }
                }
                Ok(EmployeeOutcome::Quiet) => {
                    report.already_handled += 1;
                }
                Err(e) => {
                    tracing::error!(
                        employee = %employee.id,
                        error = %e,
                        "Sweep skipped employee after error"
                    );
                    report.employee_errors += 1;
                }
            }
        }

        tracing::info!(
            examined = report.examined,
            dispatched = report.dispatched,
            suppressed = report.suppressed,
            channel_failures = report.channel_failures,
            "Visa-expiry sweep finished"
        );

        Ok(report)
    }

    async fn process_employee(
        &self,
        employee: &Employee,
        today: chrono::NaiveDate,
    ) -> AppResult<EmployeeOutcome> {
        // Candidates are pre-filtered, but the guard keeps this safe if the
        // query ever widens.
        let Some(expiry) = employee.visa_expiry_date else {
            return Ok(EmployeeOutcome::Quiet);
        };

        let Some(plan) = plan_employee(today, expiry, &employee.notification_state.0) else {
            return Ok(EmployeeOutcome::Quiet);
        };

        let alert = build_alert(employee, plan.fire, plan.days_remaining);
        tracing::info!(
            employee = %employee.id,
            threshold = %plan.fire,
            days_remaining = plan.days_remaining,
            "Dispatching visa alert"
        );

        let outcome = self.dispatcher.dispatch(&alert).await;

        // The marker is written regardless of per-channel outcomes:
        // re-firing on partial failure would duplicate on the channels
        // that succeeded.
        let state = apply_plan(&employee.notification_state.0, &plan, Utc::now());
        let write_failed = match self
            .employee_repo
            .update_notification_state(employee.id, &state)
            .await
        {
            Ok(()) => false,
            Err(e) => {
                tracing::warn!(
                    employee = %employee.id,
                    threshold = %plan.fire,
                    error = %e,
                    "Marker write failed after dispatch; the next sweep may resend"
                );
                true
            }
        };

        Ok(EmployeeOutcome::Dispatched {
            suppressed: plan.suppress.len() as u64,
            channel_failures: outcome.failures.len() as u64,
            write_failed,
        })
    }
}
