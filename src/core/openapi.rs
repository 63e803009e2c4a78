use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::scans::models::ScanType;
use crate::features::vehicles::{dtos as vehicles_dtos, handlers as vehicles_handlers};
use crate::features::violations::{
    dtos as violations_dtos, handlers as violations_handlers, models as violations_models,
};
use crate::shared::types::{ApiResponse, ErrorResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Violations
        violations_handlers::submit_violation,
        violations_handlers::list_violations,
        violations_handlers::get_fine_schedule,
        // Vehicles
        vehicles_handlers::lookup_vehicle,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ErrorResponse,
            // Violations
            violations_models::ViolationStatus,
            violations_dtos::SubmitViolationDto,
            violations_dtos::ViolationSummaryDto,
            violations_dtos::SubmitViolationResponseDto,
            violations_dtos::ViolationResponseDto,
            violations_dtos::FineScheduleEntryDto,
            violations_dtos::FineScheduleDto,
            ApiResponse<Vec<violations_dtos::ViolationResponseDto>>,
            ApiResponse<violations_dtos::FineScheduleDto>,
            // Vehicles
            vehicles_dtos::VehicleLookupDto,
            vehicles_dtos::VehicleResponseDto,
            vehicles_dtos::VehicleLookupResponseDto,
            // Scans
            ScanType,
        )
    ),
    tags(
        (name = "violations", description = "Violation intake and listing"),
        (name = "vehicles", description = "Vehicle lookup by plate or VIN"),
    ),
    info(
        title = "Patrol Violations API",
        version = "0.1.0",
        description = "Violation intake and vehicle lookup for patrol officers",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// OpenAPI document with info taken from config
pub fn document(config: &SwaggerConfig) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(config).modify(&mut openapi);
    openapi
}
