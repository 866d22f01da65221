pub mod aggregate;

pub use aggregate::{Duration, ServiceId, ServiceOption};
