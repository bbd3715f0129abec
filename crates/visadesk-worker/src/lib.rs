//! # visadesk-worker
//!
//! Optional in-process schedule that runs the visa-expiry sweep on a cron
//! expression. The HTTP trigger endpoint remains the primary interface;
//! this is for deployments without an external cron caller.

pub mod scheduler;

pub use scheduler::SweepScheduler;
