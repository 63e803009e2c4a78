use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::middleware::method_not_allowed;
use crate::features::violations::handlers;
use crate::features::violations::services::ViolationService;

/// Create routes for the violations feature
pub fn routes(service: Arc<ViolationService>) -> Router {
    Router::new()
        .route(
            "/submit-violation",
            post(handlers::submit_violation).fallback(method_not_allowed),
        )
        .route(
            "/violations",
            get(handlers::list_violations).fallback(method_not_allowed),
        )
        .route(
            "/fine-schedule",
            get(handlers::get_fine_schedule).fallback(method_not_allowed),
        )
        .with_state(service)
}
