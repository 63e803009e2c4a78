use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Violation status enum matching the `violation_status` database enum.
///
/// Intake only ever writes `Pending`; the back office moves violations to
/// the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "violation_status")]
pub enum ViolationStatus {
    Pending,
    Resolved,
    Rejected,
}

impl std::fmt::Display for ViolationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationStatus::Pending => write!(f, "Pending"),
            ViolationStatus::Resolved => write!(f, "Resolved"),
            ViolationStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

impl std::str::FromStr for ViolationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ViolationStatus::Pending),
            "Resolved" => Ok(ViolationStatus::Resolved),
            "Rejected" => Ok(ViolationStatus::Rejected),
            other => Err(format!(
                "Invalid status '{}': expected Pending, Resolved or Rejected",
                other
            )),
        }
    }
}

/// Row to insert for a new violation. Every field is final at this point,
/// including the fine.
#[derive(Debug, Clone, PartialEq)]
pub struct NewViolation {
    pub plate_number: String,
    /// Weak reference: unset when no registered vehicle has this plate
    pub vehicle_id: Option<Uuid>,
    pub officer_id: String,
    pub violation_type: String,
    pub violation_details: String,
    pub location: String,
    pub status: ViolationStatus,
    pub evidence_urls: Vec<String>,
    pub fine_amount: Decimal,
}

/// Database model for violation
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Violation {
    pub id: Uuid,
    pub plate_number: String,
    pub vehicle_id: Option<Uuid>,
    pub officer_id: String,
    pub violation_type: String,
    pub violation_details: String,
    pub location: String,
    pub status: ViolationStatus,
    pub evidence_urls: Vec<String>,
    pub fine_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Filters for listing violations; `None` means unfiltered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationFilter {
    pub status: Option<ViolationStatus>,
    /// Already normalized
    pub plate_number: Option<String>,
    pub officer_id: Option<String>,
}
