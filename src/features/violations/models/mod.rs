pub mod fine_schedule;
mod violation;

pub use fine_schedule::{fine_for, ViolationType, DEFAULT_FINE, FINE_SCHEDULE};
pub use violation::{NewViolation, Violation, ViolationFilter, ViolationStatus};
