//! # visadesk-service
//!
//! Business logic for VisaDesk: the visa-expiry sweep (classifier, engine,
//! statistics) and the employee / notification CRUD services.

pub mod employee;
pub mod notification;
pub mod sweep;
