/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// INTAKE DEFAULTS
// =============================================================================

/// Stored on a violation when the officer gives no location
pub const DEFAULT_VIOLATION_LOCATION: &str = "Not specified";

/// Audit location for a violation submitted without a location
pub const SUBMISSION_SCAN_LOCATION: &str = "Dashboard Submission";

/// Audit location for manual plate/VIN lookups
pub const LOOKUP_SCAN_LOCATION: &str = "Dashboard Lookup";

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MISSING_VIOLATION_FIELDS: &str =
    "Missing required fields: plateNumber, violationType, violationDetails, officerId";

pub const MISSING_PLATE_OR_VIN: &str = "Plate number or VIN is required";

pub const VIOLATION_CREATE_FAILED: &str = "Failed to create violation record";

pub const VEHICLE_LOOKUP_FAILED: &str = "Database lookup failed";

pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found in database";
