use std::sync::Arc;

use axum::{routing::post, Router};

use crate::core::middleware::method_not_allowed;
use crate::features::vehicles::handlers;
use crate::features::vehicles::services::VehicleService;

/// Create routes for the vehicles feature
pub fn routes(service: Arc<VehicleService>) -> Router {
    Router::new()
        .route(
            "/vehicle-lookup",
            post(handlers::lookup_vehicle).fallback(method_not_allowed),
        )
        .with_state(service)
}
