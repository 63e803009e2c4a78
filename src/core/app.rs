use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::scans::ScanService;
use crate::features::vehicles::{routes as vehicles_routes, VehicleService};
use crate::features::violations::{routes as violations_routes, ViolationService};
use crate::modules::datastore::Datastore;

/// Services shared by the routers, all backed by one datastore
#[derive(Clone)]
pub struct AppServices {
    pub violations: Arc<ViolationService>,
    pub vehicles: Arc<VehicleService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn Datastore>) -> Self {
        let scans = Arc::new(ScanService::new(Arc::clone(&store)));

        Self {
            violations: Arc::new(ViolationService::new(
                Arc::clone(&store),
                Arc::clone(&scans),
            )),
            vehicles: Arc::new(VehicleService::new(store, scans)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the application router with every route and layer
pub fn build_router(
    services: AppServices,
    config: &AppConfig,
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    let [allow_headers, allow_methods] = middleware::cors_response_headers();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(violations_routes::routes(services.violations))
        .merge(vehicles_routes::routes(services.vehicles))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(middleware::cors_layer(&config.cors_allowed_origins))
        .layer(SetResponseHeaderLayer::if_not_present(
            allow_headers.0,
            allow_headers.1,
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            allow_methods.0,
            allow_methods.1,
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or keep the client's)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
