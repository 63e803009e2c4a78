use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::Datastore;
use crate::core::error::{AppError, Result};
use crate::features::scans::models::{NewScan, Scan};
use crate::features::vehicles::models::Vehicle;
use crate::features::violations::models::{
    NewViolation, Violation, ViolationFilter, ViolationStatus,
};

/// In-memory datastore with switchable failures
#[derive(Default)]
pub struct MemoryDatastore {
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub violations: Mutex<Vec<Violation>>,
    pub scans: Mutex<Vec<Scan>>,
    pub fail_vehicle_reads: AtomicBool,
    pub fail_violation_reads: AtomicBool,
    pub fail_violation_writes: AtomicBool,
    pub fail_scan_writes: AtomicBool,
}

fn injected(flag: &AtomicBool) -> Result<()> {
    if flag.load(Ordering::SeqCst) {
        return Err(AppError::Database(sqlx::Error::PoolTimedOut));
    }
    Ok(())
}

fn filter_matches(filter: &ViolationFilter, violation: &Violation) -> bool {
    filter.status.map_or(true, |s| violation.status == s)
        && filter
            .plate_number
            .as_ref()
            .map_or(true, |p| &violation.plate_number == p)
        && filter
            .officer_id
            .as_ref()
            .map_or(true, |o| &violation.officer_id == o)
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_vehicle(&self, plate_number: &str, vin: Option<&str>) -> Vehicle {
        let vehicle = Vehicle {
            id: Uuid::now_v7(),
            plate_number: plate_number.to_string(),
            vin: vin.map(str::to_string),
            make: Some("Toyota".to_string()),
            model: Some("Camry".to_string()),
            year: Some(2019),
            color: Some("Silver".to_string()),
            owner_name: Some("Jordan Lee".to_string()),
            registration_status: Some("Valid".to_string()),
            insurance_status: Some("Active".to_string()),
            created_at: Utc::now(),
        };
        self.vehicles.lock().await.push(vehicle.clone());
        vehicle
    }

    /// Seed a violation row directly, bypassing intake
    pub async fn add_violation(&self, plate_number: &str, status: ViolationStatus) -> Violation {
        let violation = Violation {
            id: Uuid::now_v7(),
            plate_number: plate_number.to_string(),
            vehicle_id: None,
            officer_id: "OFF-SEED".to_string(),
            violation_type: "Speeding".to_string(),
            violation_details: "seeded".to_string(),
            location: "Main St".to_string(),
            status,
            evidence_urls: Vec::new(),
            fine_amount: rust_decimal::Decimal::from(150),
            created_at: Utc::now(),
        };
        self.violations.lock().await.push(violation.clone());
        violation
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Datastore for MemoryDatastore {
    async fn find_vehicle_by_plate(&self, plate_number: &str) -> Result<Option<Vehicle>> {
        injected(&self.fail_vehicle_reads)?;
        Ok(self
            .vehicles
            .lock()
            .await
            .iter()
            .find(|v| v.plate_number == plate_number)
            .cloned())
    }

    async fn find_vehicles_by_plate_or_vin(
        &self,
        identifier: &str,
        limit: i64,
    ) -> Result<Vec<Vehicle>> {
        injected(&self.fail_vehicle_reads)?;
        Ok(self
            .vehicles
            .lock()
            .await
            .iter()
            .filter(|v| v.plate_number == identifier || v.vin.as_deref() == Some(identifier))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count_violations(&self, plate_number: &str, status: ViolationStatus) -> Result<i64> {
        injected(&self.fail_violation_reads)?;
        let count = self
            .violations
            .lock()
            .await
            .iter()
            .filter(|v| v.plate_number == plate_number && v.status == status)
            .count();
        Ok(count as i64)
    }

    async fn insert_violation(&self, violation: NewViolation) -> Result<Violation> {
        injected(&self.fail_violation_writes)?;
        let created = Violation {
            id: Uuid::now_v7(),
            plate_number: violation.plate_number,
            vehicle_id: violation.vehicle_id,
            officer_id: violation.officer_id,
            violation_type: violation.violation_type,
            violation_details: violation.violation_details,
            location: violation.location,
            status: violation.status,
            evidence_urls: violation.evidence_urls,
            fine_amount: violation.fine_amount,
            created_at: Utc::now(),
        };
        self.violations.lock().await.push(created.clone());
        Ok(created)
    }

    async fn list_violations(
        &self,
        filter: &ViolationFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Violation>, i64)> {
        injected(&self.fail_violation_reads)?;
        let violations = self.violations.lock().await;
        let mut matching: Vec<Violation> = violations
            .iter()
            .filter(|v| filter_matches(filter, v))
            .cloned()
            .collect();
        // Insertion order is creation order; newest first
        matching.reverse();
        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();
        Ok((page, total))
    }

    async fn insert_scan(&self, scan: NewScan) -> Result<Scan> {
        injected(&self.fail_scan_writes)?;
        let created = Scan {
            id: Uuid::now_v7(),
            officer_id: scan.officer_id,
            plate_number: scan.plate_number,
            scan_type: scan.scan_type,
            scan_result: Json(scan.scan_result),
            location: Some(scan.location),
            created_at: Utc::now(),
        };
        self.scans.lock().await.push(created.clone());
        Ok(created)
    }
}
