//! Vehicle lookup by plate or VIN.
//!
//! Vehicles come from the external registry; this feature only reads them,
//! adds the count of pending violations, and audits officer lookups.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/vehicle-lookup` | Resolve a plate or VIN |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::VehicleService;
