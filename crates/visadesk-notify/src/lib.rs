//! # visadesk-notify
//!
//! Delivery side of the visa-expiry sweep: the alert formatter, the
//! channel implementations (SMTP email, Telegram Bot API, in-app log),
//! and the dispatcher that fans one alert out to every enabled channel
//! with per-channel error capture.

pub mod channels;
pub mod dispatcher;
pub mod message;

pub use dispatcher::{ChannelDispatcher, ChannelFailure, DispatchOutcome};
