use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::vehicles::dtos::{VehicleLookup, VehicleLookupDto, VehicleLookupResponseDto};
use crate::features::vehicles::services::VehicleService;
use crate::shared::types::ErrorResponse;

/// Look up a vehicle by plate number or VIN
///
/// Returns `found: false` with 200 when nothing matches.
#[utoipa::path(
    post,
    path = "/vehicle-lookup",
    request_body = VehicleLookupDto,
    responses(
        (status = 200, description = "Lookup result, found or not", body = VehicleLookupResponseDto),
        (status = 400, description = "Plate number or VIN is required", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Database lookup failed", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn lookup_vehicle(
    State(service): State<Arc<VehicleService>>,
    AppJson(dto): AppJson<VehicleLookupDto>,
) -> Result<Json<VehicleLookupResponseDto>> {
    let lookup = VehicleLookup::try_from(dto)?;

    Ok(Json(service.lookup(lookup).await?))
}
