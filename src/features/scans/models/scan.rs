use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of officer action recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "scan_type")]
pub enum ScanType {
    /// A violation was submitted
    Violation,
    /// An officer looked up a plate or VIN by hand
    Manual,
    /// Reserved for the camera plate scanner client
    Scanner,
}

impl std::fmt::Display for ScanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanType::Violation => write!(f, "Violation"),
            ScanType::Manual => write!(f, "Manual"),
            ScanType::Scanner => write!(f, "Scanner"),
        }
    }
}

/// Structured payload of a scan; its shape follows the scan type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanResult {
    Violation {
        violation_id: Uuid,
        violation_type: String,
    },
    Lookup {
        found: bool,
    },
}

/// Audit row to append
#[derive(Debug, Clone, PartialEq)]
pub struct NewScan {
    pub officer_id: String,
    pub plate_number: String,
    pub scan_type: ScanType,
    pub scan_result: ScanResult,
    pub location: String,
}

/// Database model for an audit row. Append-only.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Scan {
    pub id: Uuid,
    pub officer_id: String,
    pub plate_number: String,
    pub scan_type: ScanType,
    pub scan_result: Json<ScanResult>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scan_result_payload_shapes() {
        let id = Uuid::nil();
        let violation = ScanResult::Violation {
            violation_id: id,
            violation_type: "Speeding".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&violation).unwrap(),
            json!({ "violation_id": id, "violation_type": "Speeding" })
        );
        assert_eq!(
            serde_json::to_value(ScanResult::Lookup { found: true }).unwrap(),
            json!({ "found": true })
        );
    }

    #[test]
    fn test_scan_result_deserializes_back_to_variant() {
        let parsed: ScanResult = serde_json::from_value(json!({ "found": false })).unwrap();
        assert_eq!(parsed, ScanResult::Lookup { found: false });
    }
}
