//! # visadesk-api
//!
//! HTTP API layer for VisaDesk built on Axum.
//!
//! Provides the sweep trigger and statistics endpoints, employee CRUD,
//! the in-app notification log, health checks, middleware (CORS,
//! logging), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
