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

use thiserror::Error;

/// Errors raised while building or querying the operation registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Operation not found: {id}")]
    OperationNotFound { id: String },

    #[error("Duplicate operation id: {id}")]
    DuplicateOperation { id: String },

    #[error("Operation id cannot be empty (operation name: {name})")]
    EmptyOperationId { name: String },

    #[error("Parameter name cannot be empty in operation {operation}")]
    EmptyParameterName { operation: String },

    #[error("Duplicate parameter {parameter} in operation {operation}")]
    DuplicateParameter { operation: String, parameter: String },
}

impl CatalogError {
    /// True for lookups that missed, as opposed to malformed records
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::OperationNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
