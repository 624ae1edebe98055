// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! HTTP API over the operation catalog

pub mod categories;
pub mod health;
pub mod metadata;
pub mod operations;
pub mod site;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use opcatalog_core::{CatalogError, OperationRegistry, ServiceInfo};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub use categories::list_categories;
pub use health::health_check;
pub use metadata::get_metadata;
pub use operations::{get_operation, list_operations};
pub use site::{get_service_info, serve_index};

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::OperationNotFound { .. } => {
                ApiError::NotFound("Operation not found".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<OperationRegistry>,
    pub service: Arc<ServiceInfo>,
    /// Landing page served at `/`
    pub index_file: Arc<PathBuf>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(registry: OperationRegistry, service: ServiceInfo, index_file: PathBuf) -> Self {
        Self {
            registry: Arc::new(registry),
            service: Arc::new(service),
            index_file: Arc::new(index_file),
            started_at: Instant::now(),
        }
    }
}

/// Catalog routes, without middleware
///
/// Every route is GET-only; other methods on a known path get a 405 with
/// the same `{"detail": ..}` body as other errors.
pub fn catalog_router() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index).fallback(method_not_allowed))
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route("/service", get(get_service_info).fallback(method_not_allowed))
        .route("/metadata", get(get_metadata).fallback(method_not_allowed))
        .route("/operations", get(list_operations).fallback(method_not_allowed))
        .route(
            "/operations/:operation_id",
            get(get_operation).fallback(method_not_allowed),
        )
        .route("/categories", get(list_categories).fallback(method_not_allowed))
        .fallback(route_not_found)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
