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

//! Catalog Query Layer
//!
//! Pure read operations over an [`OperationRegistry`]. Nothing here mutates
//! the registry, so every query may run concurrently from any number of
//! request handlers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CatalogError, Result};
use crate::operation::Operation;
use crate::registry::OperationRegistry;

/// Operation totals, overall and per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub operation_count: usize,
    pub categories: BTreeMap<String, usize>,
}

/// One category with the ids of its operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub operation_count: usize,
    /// Operation ids in registry order
    pub operations: Vec<String>,
}

/// Borrowed query view over a registry
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    registry: &'a OperationRegistry,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(registry: &'a OperationRegistry) -> Self {
        Self { registry }
    }

    /// Count operations overall and per category
    pub fn summary(&self) -> CatalogSummary {
        let mut categories = BTreeMap::new();
        for operation in self.registry.all() {
            *categories.entry(operation.category.clone()).or_insert(0) += 1;
        }

        CatalogSummary {
            operation_count: self.registry.len(),
            categories,
        }
    }

    /// Every operation in registry order
    pub fn list_all(&self) -> Vec<&'a Operation> {
        self.registry.all().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Result<&'a Operation> {
        self.registry
            .get(id)
            .ok_or_else(|| CatalogError::OperationNotFound { id: id.to_string() })
    }

    /// Group operations by category, sorted by category name
    pub fn list_categories(&self) -> Vec<CategorySummary> {
        let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for operation in self.registry.all() {
            grouped
                .entry(operation.category.as_str())
                .or_default()
                .push(operation.id.clone());
        }

        grouped
            .into_iter()
            .map(|(name, operations)| CategorySummary {
                name: name.to_string(),
                operation_count: operations.len(),
                operations,
            })
            .collect()
    }
}
