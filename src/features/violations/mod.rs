//! Violation intake.
//!
//! Officers submit violations against a plate; each one is stored as
//! `Pending` with a fine fixed from the schedule at creation time, and a
//! `Violation` scan is appended to the audit log.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/submit-violation` | Submit a violation |
//! | GET | `/violations` | List violations (back office) |
//! | GET | `/fine-schedule` | Fine amounts per violation type |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ViolationService;
