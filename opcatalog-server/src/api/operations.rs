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
    extract::{Path, State},
    Json,
};
use opcatalog_core::Operation;
use tracing::debug;

use crate::api::{ApiError, AppState};

/// GET /operations - Every operation in registry order
#[tracing::instrument(skip(state))]
pub async fn list_operations(State(state): State<AppState>) -> Json<Vec<Operation>> {
    let operations: Vec<Operation> = state
        .registry
        .query()
        .list_all()
        .into_iter()
        .cloned()
        .collect();

    debug!("Listing {} operations", operations.len());
    Json(operations)
}

/// GET /operations/:operation_id - One operation by id
#[tracing::instrument(skip(state))]
pub async fn get_operation(
    State(state): State<AppState>,
    Path(operation_id): Path<String>,
) -> Result<Json<Operation>, ApiError> {
    let operation = state.registry.query().get_by_id(&operation_id).map_err(|e| {
        debug!("Lookup failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(operation.clone()))
}
