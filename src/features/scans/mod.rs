//! Scan audit log.
//!
//! Both intake and lookup append one row per officer action. The append is
//! best-effort: it runs after the primary work succeeded and its failure
//! never reaches the caller.

pub mod models;
pub mod services;

pub use services::ScanService;
