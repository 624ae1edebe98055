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

//! Service descriptor and the `/metadata` document

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::query::CatalogSummary;

/// Where the catalog's documentation lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationLinks {
    pub technical: String,
    pub source_docs: Vec<String>,
}

/// Static description of the service itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    /// Name reported by `/metadata`
    pub metadata_name: String,
    /// Description reported by `/metadata`
    pub metadata_description: String,
    pub documentation: DocumentationLinks,
}

impl ServiceInfo {
    pub fn builtin() -> Self {
        Self {
            title: "discord.py-self Programmatic Interface".to_string(),
            description: "Exposes the capabilities described in the documentation as HTTP endpoints \
                          for programmatic discovery and automation."
                .to_string(),
            version: "0.1.0".to_string(),
            metadata_name: "discord.py-self Programmatic Interface".to_string(),
            metadata_description:
                "HTTP surface that maps documented user-account operations to structured endpoints."
                    .to_string(),
            documentation: DocumentationLinks {
                technical: "docs/technical_documentation.md".to_string(),
                source_docs: vec![
                    "README.rst".to_string(),
                    "docs/quickstart.rst".to_string(),
                    "docs/authenticating.rst".to_string(),
                ],
            },
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Body of `GET /metadata`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub name: String,
    pub description: String,
    pub operation_count: usize,
    pub categories: BTreeMap<String, usize>,
    pub documentation: DocumentationLinks,
}

impl MetadataResponse {
    pub fn build(service: &ServiceInfo, summary: CatalogSummary) -> Self {
        Self {
            name: service.metadata_name.clone(),
            description: service.metadata_description.clone(),
            operation_count: summary.operation_count,
            categories: summary.categories,
            documentation: service.documentation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OperationRegistry;

    #[test]
    fn test_metadata_from_builtin() {
        let registry = OperationRegistry::builtin().unwrap();
        let metadata = MetadataResponse::build(&ServiceInfo::builtin(), registry.query().summary());

        assert_eq!(metadata.name, "discord.py-self Programmatic Interface");
        assert_eq!(metadata.operation_count, 18);
        assert_eq!(metadata.categories.get("interactions"), Some(&1));
        assert_eq!(metadata.documentation.source_docs.len(), 3);
    }

    #[test]
    fn test_metadata_json_shape() {
        let metadata = MetadataResponse::build(
            &ServiceInfo::builtin(),
            CatalogSummary {
                operation_count: 0,
                categories: BTreeMap::new(),
            },
        );
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["operation_count"], 0);
        assert!(value["categories"].as_object().unwrap().is_empty());
        assert_eq!(value["documentation"]["technical"], "docs/technical_documentation.md");
        assert_eq!(value["documentation"]["source_docs"][0], "README.rst");
    }
}
