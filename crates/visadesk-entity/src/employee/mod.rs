//! Employee entity: model, thresholds, and the notification state map.

pub mod model;
pub mod status;
pub mod threshold;

pub use model::{CreateEmployee, Employee, UpdateEmployee};
pub use status::ThresholdState;
pub use threshold::Threshold;
