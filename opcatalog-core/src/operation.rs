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

//! Operation records
//!
//! An [`Operation`] documents one capability of the upstream library: what it
//! is called, which category it belongs to, the inputs it takes and where in
//! the upstream documentation it is described. Records are descriptive only;
//! nothing here validates a [`Parameter::param_type`] against real values.

use serde::{Deserialize, Serialize};

/// One input declared by an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique within the parent operation's parameter list
    pub name: String,
    /// Free-form type label ("string", "boolean", "object", ...)
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub description: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            required,
            description: description.into(),
        }
    }

    /// Shorthand for a required parameter
    pub fn required(
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, param_type, true, description)
    }

    /// Shorthand for an optional parameter
    pub fn optional(
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, param_type, false, description)
    }
}

/// A documented capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Stable lookup key, unique across the registry
    pub id: String,
    /// Human-readable title
    pub name: String,
    /// Grouping tag (free vocabulary)
    pub category: String,
    /// One-line description
    pub summary: String,
    pub description: String,
    /// Declared inputs, in documentation order
    pub parameters: Vec<Parameter>,
    /// Citations into the upstream docs, e.g. "README.rst L30-L33"
    pub sources: Vec<String>,
}

impl Operation {
    /// Create an operation with empty text fields, parameters and sources
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            summary: String::new(),
            description: String::new(),
            parameters: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }
}
