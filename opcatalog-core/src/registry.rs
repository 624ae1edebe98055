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

//! Operation Registry
//!
//! Insertion-ordered map from operation id to [`Operation`], built once at
//! startup and never mutated afterwards. Readers share it through an `Arc`
//! without any locking.

use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::builtin::builtin_operations;
use crate::error::{CatalogError, Result};
use crate::operation::Operation;
use crate::query::CatalogQuery;

/// Immutable operation registry
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: IndexMap<String, Operation>,
}

impl OperationRegistry {
    /// Build a registry from an ordered list of operations
    ///
    /// Fails on the first duplicate id or structurally invalid record.
    pub fn new(operations: Vec<Operation>) -> Result<Self> {
        let mut map = IndexMap::with_capacity(operations.len());

        for operation in operations {
            validate(&operation)?;
            if map.contains_key(&operation.id) {
                return Err(CatalogError::DuplicateOperation { id: operation.id });
            }
            debug!("Registered operation: id={}, category={}", operation.id, operation.category);
            map.insert(operation.id.clone(), operation);
        }

        info!("Operation registry built with {} operations", map.len());
        Ok(Self { operations: map })
    }

    /// Build a registry where a later record with the same id replaces the
    /// earlier one
    ///
    /// The replacement keeps the position of the first record with that id.
    pub fn new_overwriting(operations: Vec<Operation>) -> Result<Self> {
        let mut map: IndexMap<String, Operation> = IndexMap::with_capacity(operations.len());

        for operation in operations {
            validate(&operation)?;
            if let Some(previous) = map.insert(operation.id.clone(), operation) {
                warn!("Operation {} registered twice, keeping the later record", previous.id);
            }
        }

        info!("Operation registry built with {} operations", map.len());
        Ok(Self { operations: map })
    }

    /// Registry holding the documented operations shipped with the service
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_operations())
    }

    pub fn get(&self, id: &str) -> Option<&Operation> {
        self.operations.get(id)
    }

    /// Every operation, in insertion order
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Operation> + '_ {
        self.operations.values()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Read-only query view over this registry
    pub fn query(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self)
    }
}

fn validate(operation: &Operation) -> Result<()> {
    if operation.id.is_empty() {
        return Err(CatalogError::EmptyOperationId {
            name: operation.name.clone(),
        });
    }

    let mut seen = HashSet::with_capacity(operation.parameters.len());
    for parameter in &operation.parameters {
        if parameter.name.is_empty() {
            return Err(CatalogError::EmptyParameterName {
                operation: operation.id.clone(),
            });
        }
        if !seen.insert(parameter.name.as_str()) {
            return Err(CatalogError::DuplicateParameter {
                operation: operation.id.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }

    Ok(())
}
