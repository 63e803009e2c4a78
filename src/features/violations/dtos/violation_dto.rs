use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::violations::models::{Violation, ViolationStatus};
use crate::shared::constants::MISSING_VIOLATION_FIELDS;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::non_empty;

/// Request DTO for submitting a violation.
///
/// Required fields are optional here so that a missing field and an empty
/// one produce the same validation error instead of a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitViolationDto {
    /// Plate as read by the officer; stored upper-cased
    #[validate(required, length(min = 1))]
    #[schema(value_type = String)]
    pub plate_number: Option<String>,

    /// Label from the fine schedule, or any other text (fined at the default)
    #[validate(required, length(min = 1))]
    #[schema(value_type = String)]
    pub violation_type: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(value_type = String)]
    pub violation_details: Option<String>,

    /// Opaque id of the submitting officer
    #[validate(required, length(min = 1))]
    #[schema(value_type = String)]
    pub officer_id: Option<String>,

    pub location: Option<String>,

    pub evidence_urls: Option<Vec<String>>,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationSubmission {
    pub plate_number: String,
    pub violation_type: String,
    pub violation_details: String,
    pub officer_id: String,
    /// `None` when absent or empty
    pub location: Option<String>,
    pub evidence_urls: Vec<String>,
}

impl TryFrom<SubmitViolationDto> for ViolationSubmission {
    type Error = AppError;

    fn try_from(dto: SubmitViolationDto) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation(MISSING_VIOLATION_FIELDS.to_string());

        dto.validate().map_err(|_| missing())?;

        Ok(Self {
            plate_number: dto.plate_number.ok_or_else(missing)?,
            violation_type: dto.violation_type.ok_or_else(missing)?,
            violation_details: dto.violation_details.ok_or_else(missing)?,
            officer_id: dto.officer_id.ok_or_else(missing)?,
            location: non_empty(dto.location),
            evidence_urls: dto.evidence_urls.unwrap_or_default(),
        })
    }
}

/// The created violation as returned by intake
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViolationSummaryDto {
    pub id: Uuid,
    pub plate_number: String,
    pub violation_type: String,
    pub status: ViolationStatus,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub fine_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Response DTO for a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitViolationResponseDto {
    pub success: bool,
    pub violation: ViolationSummaryDto,
}

/// Full violation record for the back-office listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViolationResponseDto {
    pub id: Uuid,
    pub plate_number: String,
    pub vehicle_id: Option<Uuid>,
    pub officer_id: String,
    pub violation_type: String,
    pub violation_details: String,
    pub location: String,
    pub status: ViolationStatus,
    pub evidence_urls: Vec<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub fine_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Violation> for ViolationSummaryDto {
    fn from(v: Violation) -> Self {
        Self {
            id: v.id,
            plate_number: v.plate_number,
            violation_type: v.violation_type,
            status: v.status,
            fine_amount: v.fine_amount,
            created_at: v.created_at,
        }
    }
}

impl From<Violation> for ViolationResponseDto {
    fn from(v: Violation) -> Self {
        Self {
            id: v.id,
            plate_number: v.plate_number,
            vehicle_id: v.vehicle_id,
            officer_id: v.officer_id,
            violation_type: v.violation_type,
            violation_details: v.violation_details,
            location: v.location,
            status: v.status,
            evidence_urls: v.evidence_urls,
            fine_amount: v.fine_amount,
            created_at: v.created_at,
        }
    }
}

/// Query params for listing violations
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ViolationQueryParams {
    /// Filter by status: Pending, Resolved or Rejected
    pub status: Option<String>,
    /// Filter by plate (case-insensitive)
    pub plate: Option<String>,
    /// Filter by submitting officer
    pub officer_id: Option<String>,
    /// Page number (1-indexed)
    pub page: Option<i64>,
    /// Items per page (max 100)
    pub page_size: Option<i64>,
}

impl ViolationQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        let defaults = PaginationQuery::default();
        PaginationQuery {
            page: self.page.unwrap_or(defaults.page),
            page_size: self.page_size.unwrap_or(defaults.page_size),
        }
    }
}

/// One line of the fine schedule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FineScheduleEntryDto {
    pub violation_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub fine_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FineScheduleDto {
    pub entries: Vec<FineScheduleEntryDto>,
    /// Applied to any type not listed
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub default_fine: Decimal,
}
