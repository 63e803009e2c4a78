use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::scans::models::{NewScan, ScanResult, ScanType};
use crate::features::scans::ScanService;
use crate::features::violations::dtos::{
    FineScheduleDto, FineScheduleEntryDto, ViolationQueryParams, ViolationResponseDto,
    ViolationSubmission, ViolationSummaryDto,
};
use crate::features::violations::models::{
    fine_for, NewViolation, ViolationFilter, ViolationStatus, DEFAULT_FINE, FINE_SCHEDULE,
};
use crate::modules::datastore::Datastore;
use crate::shared::constants::{
    DEFAULT_VIOLATION_LOCATION, SUBMISSION_SCAN_LOCATION, VIOLATION_CREATE_FAILED,
};
use crate::shared::validation::{non_empty, normalize_identifier};

/// Service for violation intake and the back-office listing
pub struct ViolationService {
    store: Arc<dyn Datastore>,
    scans: Arc<ScanService>,
}

impl ViolationService {
    pub fn new(store: Arc<dyn Datastore>, scans: Arc<ScanService>) -> Self {
        Self { store, scans }
    }

    /// Persist a new pending violation and record the submission scan.
    ///
    /// The vehicle link is optional: an unknown plate, or a failed vehicle
    /// read, leaves `vehicle_id` unset. Only the violation insert itself can
    /// fail the request.
    pub async fn submit(&self, submission: ViolationSubmission) -> Result<ViolationSummaryDto> {
        let plate_number = normalize_identifier(&submission.plate_number);

        let vehicle_id = match self.store.find_vehicle_by_plate(&plate_number).await {
            Ok(vehicle) => vehicle.map(|v| v.id),
            Err(e) => {
                tracing::warn!(
                    "Vehicle read failed for plate {}, submitting unlinked: {}",
                    plate_number,
                    e
                );
                None
            }
        };

        let fine_amount = fine_for(&submission.violation_type);

        let violation = self
            .store
            .insert_violation(NewViolation {
                plate_number: plate_number.clone(),
                vehicle_id,
                officer_id: submission.officer_id.clone(),
                violation_type: submission.violation_type.clone(),
                violation_details: submission.violation_details,
                location: submission
                    .location
                    .clone()
                    .unwrap_or_else(|| DEFAULT_VIOLATION_LOCATION.to_string()),
                status: ViolationStatus::Pending,
                evidence_urls: submission.evidence_urls,
                fine_amount,
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to create violation: {:?}", e);
                AppError::Persistence(VIOLATION_CREATE_FAILED.to_string())
            })?;

        tracing::info!(
            "Violation created: id={}, plate={}, type={}, fine={}, vehicle_linked={}",
            violation.id,
            violation.plate_number,
            violation.violation_type,
            violation.fine_amount,
            violation.vehicle_id.is_some()
        );

        self.scans
            .record(NewScan {
                officer_id: submission.officer_id,
                plate_number,
                scan_type: ScanType::Violation,
                scan_result: ScanResult::Violation {
                    violation_id: violation.id,
                    violation_type: submission.violation_type,
                },
                location: submission
                    .location
                    .unwrap_or_else(|| SUBMISSION_SCAN_LOCATION.to_string()),
            })
            .await;

        Ok(violation.into())
    }

    /// List violations newest first with the total matching count
    pub async fn list(
        &self,
        params: &ViolationQueryParams,
    ) -> Result<(Vec<ViolationResponseDto>, i64)> {
        let status = non_empty(params.status.clone())
            .map(|s| s.parse::<ViolationStatus>())
            .transpose()
            .map_err(AppError::Validation)?;

        let filter = ViolationFilter {
            status,
            plate_number: non_empty(params.plate.clone()).map(|p| normalize_identifier(&p)),
            officer_id: non_empty(params.officer_id.clone()),
        };
        let page = params.pagination();

        let (rows, total) = self
            .store
            .list_violations(&filter, page.offset(), page.limit())
            .await
            .map_err(|e| {
                tracing::error!("Failed to list violations: {:?}", e);
                e
            })?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// The fine schedule in display order
    pub fn fine_schedule(&self) -> FineScheduleDto {
        FineScheduleDto {
            entries: FINE_SCHEDULE
                .iter()
                .map(|(kind, amount)| FineScheduleEntryDto {
                    violation_type: kind.label().to_string(),
                    fine_amount: (*amount).into(),
                })
                .collect(),
            default_fine: DEFAULT_FINE.into(),
        }
    }
}
