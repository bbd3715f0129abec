//! # visadesk-core
//!
//! Core crate for VisaDesk. Contains the channel trait, configuration
//! schemas, shared request/response types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other VisaDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
