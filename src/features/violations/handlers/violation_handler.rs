use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::violations::dtos::{
    FineScheduleDto, SubmitViolationDto, SubmitViolationResponseDto, ViolationQueryParams,
    ViolationResponseDto, ViolationSubmission,
};
use crate::features::violations::services::ViolationService;
use crate::shared::types::{ApiResponse, ErrorResponse, Meta};

/// Submit a traffic violation against a plate
///
/// The fine is fixed at submission from the fine schedule. A plate with no
/// registered vehicle is accepted.
#[utoipa::path(
    post,
    path = "/submit-violation",
    request_body = SubmitViolationDto,
    responses(
        (status = 200, description = "Violation recorded", body = SubmitViolationResponseDto),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Failed to create violation record", body = ErrorResponse)
    ),
    tag = "violations"
)]
pub async fn submit_violation(
    State(service): State<Arc<ViolationService>>,
    AppJson(dto): AppJson<SubmitViolationDto>,
) -> Result<Json<SubmitViolationResponseDto>> {
    let submission = ViolationSubmission::try_from(dto)?;

    let violation = service.submit(submission).await?;
    Ok(Json(SubmitViolationResponseDto {
        success: true,
        violation,
    }))
}

/// List violations (paginated), newest first
#[utoipa::path(
    get,
    path = "/violations",
    params(ViolationQueryParams),
    responses(
        (status = 200, description = "List of violations", body = ApiResponse<Vec<ViolationResponseDto>>),
        (status = 400, description = "Invalid status filter", body = ErrorResponse)
    ),
    tag = "violations"
)]
pub async fn list_violations(
    State(service): State<Arc<ViolationService>>,
    Query(params): Query<ViolationQueryParams>,
) -> Result<Json<ApiResponse<Vec<ViolationResponseDto>>>> {
    let (items, total) = service.list(&params).await?;

    Ok(Json(ApiResponse::success(items, Some(Meta { total }))))
}

/// Fine amounts per violation type
#[utoipa::path(
    get,
    path = "/fine-schedule",
    responses(
        (status = 200, description = "Fine schedule", body = ApiResponse<FineScheduleDto>)
    ),
    tag = "violations"
)]
pub async fn get_fine_schedule(
    State(service): State<Arc<ViolationService>>,
) -> Json<ApiResponse<FineScheduleDto>> {
    Json(ApiResponse::success(service.fine_schedule(), None))
}
