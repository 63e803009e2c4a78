use std::sync::Arc;

use axum_test::TestServer;
use utoipa::OpenApi;

use crate::core::app::{build_router, AppServices};
use crate::core::config::AppConfig;
use crate::core::openapi::ApiDoc;
use crate::modules::datastore::memory::MemoryDatastore;

/// Full application router over an in-memory datastore
pub fn test_server(store: Arc<MemoryDatastore>) -> TestServer {
    let router = build_router(
        AppServices::new(store),
        &AppConfig::default(),
        ApiDoc::openapi(),
    );
    TestServer::new(router).expect("test server should start")
}
