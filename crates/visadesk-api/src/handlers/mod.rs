//! HTTP request handlers, one module per domain.

pub mod employee;
pub mod health;
pub mod notification;
pub mod sweep;
