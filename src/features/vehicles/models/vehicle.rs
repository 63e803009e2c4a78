use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a registered vehicle.
///
/// Rows are owned by the external registry process; this service only reads
/// them. `plate_number` and `vin` are stored upper-cased.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vehicle {
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
}
