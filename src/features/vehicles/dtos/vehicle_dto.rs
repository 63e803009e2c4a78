use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::vehicles::models::Vehicle;
use crate::shared::constants::{MISSING_PLATE_OR_VIN, VEHICLE_NOT_FOUND};
use crate::shared::validation::non_empty;

/// Request DTO for a plate or VIN lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLookupDto {
    /// Plate number or VIN, any case
    #[validate(required, length(min = 1))]
    #[schema(value_type = String)]
    pub plate_or_vin: Option<String>,

    /// When set and the vehicle is found, the lookup is recorded as a scan
    pub officer_id: Option<String>,
}

/// A lookup that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleLookup {
    pub plate_or_vin: String,
    pub officer_id: Option<String>,
}

impl TryFrom<VehicleLookupDto> for VehicleLookup {
    type Error = AppError;

    fn try_from(dto: VehicleLookupDto) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation(MISSING_PLATE_OR_VIN.to_string());

        dto.validate().map_err(|_| missing())?;

        Ok(Self {
            plate_or_vin: dto.plate_or_vin.ok_or_else(missing)?,
            officer_id: non_empty(dto.officer_id),
        })
    }
}

/// Vehicle record with its outstanding violation count.
///
/// Registry fields keep their stored (snake_case) names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponseDto {
    pub id: Uuid,
    pub plate_number: String,
    pub vin: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub owner_name: Option<String>,
    pub registration_status: Option<String>,
    pub insurance_status: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Violations on this plate still `Pending`
    #[serde(rename = "outstandingViolations")]
    pub outstanding_violations: i64,
}

impl VehicleResponseDto {
    pub fn new(v: Vehicle, outstanding_violations: i64) -> Self {
        Self {
            id: v.id,
            plate_number: v.plate_number,
            vin: v.vin,
            make: v.make,
            model: v.model,
            year: v.year,
            color: v.color,
            owner_name: v.owner_name,
            registration_status: v.registration_status,
            insurance_status: v.insurance_status,
            created_at: v.created_at,
            outstanding_violations,
        }
    }
}

/// Lookup outcome. Not finding a vehicle is a normal result, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleLookupResponseDto {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleResponseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VehicleLookupResponseDto {
    pub fn found(vehicle: VehicleResponseDto) -> Self {
        Self {
            found: true,
            vehicle: Some(vehicle),
            message: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            vehicle: None,
            message: Some(VEHICLE_NOT_FOUND.to_string()),
        }
    }
}
