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

//! Opcatalog Core
//!
//! Operation records, the immutable operation registry and the read-only
//! query layer served by `opcatalog-server`.

pub mod builtin;
pub mod error;
pub mod operation;
pub mod query;
pub mod registry;
pub mod service;

pub use builtin::builtin_operations;
pub use error::{CatalogError, Result};
pub use operation::{Operation, Parameter};
pub use query::{CatalogQuery, CatalogSummary, CategorySummary};
pub use registry::OperationRegistry;
pub use service::{DocumentationLinks, MetadataResponse, ServiceInfo};
