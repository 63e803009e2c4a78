use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::scans::models::{NewScan, ScanResult, ScanType};
use crate::features::scans::ScanService;
use crate::features::vehicles::dtos::{VehicleLookup, VehicleLookupResponseDto, VehicleResponseDto};
use crate::features::violations::models::ViolationStatus;
use crate::modules::datastore::Datastore;
use crate::shared::constants::{LOOKUP_SCAN_LOCATION, VEHICLE_LOOKUP_FAILED};
use crate::shared::validation::normalize_identifier;

/// Service for resolving a plate or VIN to a registered vehicle
pub struct VehicleService {
    store: Arc<dyn Datastore>,
    scans: Arc<ScanService>,
}

impl VehicleService {
    pub fn new(store: Arc<dyn Datastore>, scans: Arc<ScanService>) -> Self {
        Self { store, scans }
    }

    /// Look up a vehicle by plate or VIN.
    ///
    /// More than one matching row is treated as no match. A failed outstanding
    /// count reports 0. A manual scan is recorded only when a vehicle was
    /// found and an officer id was given.
    pub async fn lookup(&self, lookup: VehicleLookup) -> Result<VehicleLookupResponseDto> {
        let identifier = normalize_identifier(&lookup.plate_or_vin);

        let mut matches = self
            .store
            .find_vehicles_by_plate_or_vin(&identifier, 2)
            .await
            .map_err(|e| lookup_failed("Vehicle lookup", e))?;

        let vehicle = match matches.len() {
            0 => None,
            1 => matches.pop(),
            _ => {
                tracing::warn!(
                    "Ambiguous lookup: {} matches more than one vehicle",
                    identifier
                );
                None
            }
        };

        let Some(vehicle) = vehicle else {
            tracing::info!("No vehicle found for {}", identifier);
            return Ok(VehicleLookupResponseDto::not_found());
        };

        let outstanding = match self
            .store
            .count_violations(&vehicle.plate_number, ViolationStatus::Pending)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(
                    "Outstanding violation count failed for {}, reporting 0: {:?}",
                    vehicle.plate_number,
                    e
                );
                0
            }
        };

        tracing::info!(
            "Vehicle found: id={}, plate={}, outstanding_violations={}",
            vehicle.id,
            vehicle.plate_number,
            outstanding
        );

        if let Some(officer_id) = lookup.officer_id {
            self.scans
                .record(NewScan {
                    officer_id,
                    plate_number: identifier,
                    scan_type: ScanType::Manual,
                    scan_result: ScanResult::Lookup { found: true },
                    location: LOOKUP_SCAN_LOCATION.to_string(),
                })
                .await;
        }

        Ok(VehicleLookupResponseDto::found(VehicleResponseDto::new(
            vehicle,
            outstanding,
        )))
    }
}

fn lookup_failed(step: &str, e: AppError) -> AppError {
    tracing::error!("{} failed: {:?}", step, e);
    AppError::Persistence(VEHICLE_LOOKUP_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::datastore::memory::MemoryDatastore;

    fn service(store: &Arc<MemoryDatastore>) -> VehicleService {
        let scans = Arc::new(ScanService::new(store.clone()));
        VehicleService::new(store.clone(), scans)
    }

    fn lookup(plate_or_vin: &str, officer_id: Option<&str>) -> VehicleLookup {
        VehicleLookup {
            plate_or_vin: plate_or_vin.to_string(),
            officer_id: officer_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let store = Arc::new(MemoryDatastore::new());
        let vehicle = store.add_vehicle("ABC-123", None).await;
        let service = service(&store);

        let lower = service.lookup(lookup("abc-123", None)).await.unwrap();
        let upper = service.lookup(lookup("ABC-123", None)).await.unwrap();

        assert_eq!(lower.vehicle.unwrap().id, vehicle.id);
        assert_eq!(upper.vehicle.unwrap().id, vehicle.id);
    }

    #[tokio::test]
    async fn test_lookup_by_vin() {
        let store = Arc::new(MemoryDatastore::new());
        let vehicle = store
            .add_vehicle("ABC-123", Some("1HGCM82633A004352"))
            .await;

        let found = service(&store)
            .lookup(lookup("1hgcm82633a004352", None))
            .await
            .unwrap();

        assert!(found.found);
        assert_eq!(found.vehicle.unwrap().id, vehicle.id);
    }

    #[tokio::test]
    async fn test_outstanding_counts_only_pending() {
        let store = Arc::new(MemoryDatastore::new());
        store.add_vehicle("ABC-123", None).await;
        for _ in 0..3 {
            store.add_violation("ABC-123", ViolationStatus::Pending).await;
        }
        for _ in 0..2 {
            store.add_violation("ABC-123", ViolationStatus::Resolved).await;
        }
        store.add_violation("OTHER-1", ViolationStatus::Pending).await;

        let found = service(&store)
            .lookup(lookup("abc-123", None))
            .await
            .unwrap();

        assert_eq!(found.vehicle.unwrap().outstanding_violations, 3);
    }

    #[tokio::test]
    async fn test_not_found_is_not_an_error() {
        let store = Arc::new(MemoryDatastore::new());

        let result = service(&store)
            .lookup(lookup("NOPE-1", Some("OFF-1")))
            .await
            .unwrap();

        assert!(!result.found);
        assert!(result.vehicle.is_none());
        assert!(store.scans.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_ambiguous_match_is_not_found() {
        let store = Arc::new(MemoryDatastore::new());
        store.add_vehicle("ABC-123", None).await;
        store.add_vehicle("XYZ-9", Some("ABC-123")).await;

        let result = service(&store)
            .lookup(lookup("abc-123", None))
            .await
            .unwrap();

        assert!(!result.found);
    }

    #[tokio::test]
    async fn test_scan_recorded_only_with_officer() {
        let store = Arc::new(MemoryDatastore::new());
        store.add_vehicle("ABC-123", None).await;
        let service = service(&store);

        service.lookup(lookup("abc-123", None)).await.unwrap();
        assert!(store.scans.lock().await.is_empty());

        service
            .lookup(lookup("abc-123", Some("OFF-9")))
            .await
            .unwrap();
        let scans = store.scans.lock().await;
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].officer_id, "OFF-9");
        assert_eq!(scans[0].plate_number, "ABC-123");
        assert_eq!(scans[0].scan_type, ScanType::Manual);
        assert_eq!(scans[0].scan_result.0, ScanResult::Lookup { found: true });
        assert_eq!(scans[0].location.as_deref(), Some(LOOKUP_SCAN_LOCATION));
    }

    #[tokio::test]
    async fn test_read_failure_is_persistence_error() {
        let store = Arc::new(MemoryDatastore::new());
        MemoryDatastore::fail(&store.fail_vehicle_reads);

        let err = service(&store)
            .lookup(lookup("abc-123", None))
            .await
            .unwrap_err();

        match err {
            AppError::Persistence(msg) => assert_eq!(msg, VEHICLE_LOOKUP_FAILED),
            other => panic!("expected persistence error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_count_failure_reports_zero_outstanding() {
        let store = Arc::new(MemoryDatastore::new());
        let vehicle = store.add_vehicle("ABC-123", None).await;
        MemoryDatastore::fail(&store.fail_violation_reads);

        let result = service(&store)
            .lookup(lookup("abc-123", Some("OFF-1")))
            .await
            .unwrap();

        assert!(result.found);
        let found = result.vehicle.unwrap();
        assert_eq!(found.id, vehicle.id);
        assert_eq!(found.outstanding_violations, 0);
        assert_eq!(store.scans.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_succeeds_when_scan_write_fails() {
        let store = Arc::new(MemoryDatastore::new());
        store.add_vehicle("ABC-123", None).await;
        MemoryDatastore::fail(&store.fail_scan_writes);

        let result = service(&store)
            .lookup(lookup("abc-123", Some("OFF-1")))
            .await
            .unwrap();

        assert!(result.found);
    }
}
