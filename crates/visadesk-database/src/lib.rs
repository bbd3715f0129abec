//! # visadesk-database
//!
//! PostgreSQL connection management, embedded migrations, and repository
//! implementations for VisaDesk.

pub mod connection;
pub mod migration;
pub mod repositories;
