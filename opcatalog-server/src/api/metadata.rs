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

use axum::{extract::State, Json};
use opcatalog_core::MetadataResponse;

use crate::api::AppState;

/// GET /metadata - Service description with operation counts
#[tracing::instrument(skip(state))]
pub async fn get_metadata(State(state): State<AppState>) -> Json<MetadataResponse> {
    let summary = state.registry.query().summary();
    Json(MetadataResponse::build(&state.service, summary))
}
