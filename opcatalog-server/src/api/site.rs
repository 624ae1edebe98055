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

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use opcatalog_core::ServiceInfo;
use std::io::ErrorKind;
use tracing::{debug, error};

use crate::api::{ApiError, AppState};

/// GET / - Static landing page, if one is configured on disk
///
/// The file is served as raw bytes, so pages in any encoding are passed through.
#[tracing::instrument(skip(state))]
pub async fn serve_index(State(state): State<AppState>) -> Result<Response, ApiError> {
    match tokio::fs::read(state.index_file.as_path()).await {
        Ok(content) => Ok((
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content,
        )
            .into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Landing page missing at {:?}", state.index_file);
            Err(ApiError::NotFound("index.html not found".to_string()))
        }
        Err(e) => {
            error!("Failed to read landing page {:?}: {}", state.index_file, e);
            Err(ApiError::Internal("Failed to read index.html".to_string()))
        }
    }
}

/// GET /service - Title, description and version of this service
pub async fn get_service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.service.as_ref().clone())
}
