//! The relational store holding `vehicles`, `violations` and `scans`.
//!
//! Services depend on the [`Datastore`] trait; production wires in
//! [`PgDatastore`], tests use the in-memory store. Calls are fail-fast: no
//! retries, no per-call timeouts beyond the pool's acquire timeout.

#[cfg(test)]
pub mod memory;
mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::scans::models::{NewScan, Scan};
use crate::features::vehicles::models::Vehicle;
use crate::features::violations::models::{
    NewViolation, Violation, ViolationFilter, ViolationStatus,
};

pub use postgres::PgDatastore;

#[async_trait]
pub trait Datastore: Send + Sync {
    /// Vehicle with exactly this (normalized) plate
    async fn find_vehicle_by_plate(&self, plate_number: &str) -> Result<Option<Vehicle>>;

    /// Vehicles whose plate or VIN equals `identifier`, at most `limit` rows
    async fn find_vehicles_by_plate_or_vin(
        &self,
        identifier: &str,
        limit: i64,
    ) -> Result<Vec<Vehicle>>;

    async fn count_violations(&self, plate_number: &str, status: ViolationStatus) -> Result<i64>;

    async fn insert_violation(&self, violation: NewViolation) -> Result<Violation>;

    /// Newest first, plus the total matching `filter`
    async fn list_violations(
        &self,
        filter: &ViolationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Violation>, i64)>;

    async fn insert_scan(&self, scan: NewScan) -> Result<Scan>;
}
