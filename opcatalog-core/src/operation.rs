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

//! Operation Records
//!
//! An [`OperationRecord`] describes one capability of the cataloged client
//! library: what it is called, where it is documented, and which inputs it
//! expects. Records are plain data; they are never executed.
//!
//! Parameter types are a closed set of semantic kinds ([`ParamKind`]) so that
//! every renderer (REST payloads, the OpenAPI generator) can match on them
//! exhaustively.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CatalogError, Result};

/// Semantic kind of an operation parameter
///
/// Serialized inline with its parameter as `"type": "<kind>"`, plus
/// `values` for enums and `items` for lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    String,
    Boolean,
    Integer,
    /// One of a fixed set of string values
    Enum { values: Vec<String> },
    /// Structured payload with no fixed shape
    Object,
    /// Homogeneous list of another kind
    List { items: Box<ParamKind> },
    /// Loosely typed value (e.g. a settings value whose type depends on its key)
    Variant,
}

impl ParamKind {
    /// Build an enum kind from string-like values
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamKind::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a list kind
    pub fn list_of(items: ParamKind) -> Self {
        ParamKind::List {
            items: Box::new(items),
        }
    }

    /// Wire name of the kind, as it appears under `type`
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Boolean => "boolean",
            ParamKind::Integer => "integer",
            ParamKind::Enum { .. } => "enum",
            ParamKind::Object => "object",
            ParamKind::List { .. } => "list",
            ParamKind::Variant => "variant",
        }
    }

    /// All wire names, in declaration order
    pub const NAMES: [&'static str; 7] = [
        "string", "boolean", "integer", "enum", "object", "list", "variant",
    ];

    fn check(&self) -> std::result::Result<(), String> {
        match self {
            ParamKind::Enum { values } => {
                if values.is_empty() {
                    return Err("enum kind has no values".to_string());
                }
                let mut seen = HashSet::new();
                for value in values {
                    if value.is_empty() {
                        return Err("enum kind has an empty value".to_string());
                    }
                    if !seen.insert(value.as_str()) {
                        return Err(format!("enum value '{}' is repeated", value));
                    }
                }
                Ok(())
            }
            ParamKind::List { items } => items.check(),
            _ => Ok(()),
        }
    }
}

/// One expected input of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub kind: ParamKind,
    pub optional: bool,
    pub description: String,
}

impl Parameter {
    /// A parameter the caller must supply
    pub fn required(
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            description: description.into(),
        }
    }

    /// A parameter the caller may omit
    pub fn optional(
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            optional: true,
            ..Self::required(name, kind, description)
        }
    }
}

/// Immutable description of one cataloged capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Stable lookup key, usable as a URL path segment
    pub id: String,
    /// Short display title
    pub name: String,
    pub category: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    /// Inputs in documentation order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Documentation citations, first-insertion order, no repeats
    #[serde(default)]
    pub source_refs: Vec<String>,
}

impl OperationRecord {
    /// Create a record with no parameters or sources
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            summary: summary.into(),
            description: String::new(),
            parameters: Vec::new(),
            source_refs: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a parameter; order of calls is the documented order
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a documentation citation. Adding one that is already present is a no-op.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        if !self.source_refs.contains(&source) {
            self.source_refs.push(source);
        }
        self
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameters the caller must supply, in documented order
    pub fn required_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.optional)
    }

    /// Construction-time checks for a single record
    pub(crate) fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(CatalogError::invalid(&self.id, "id is empty"));
        }
        if !self
            .id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(CatalogError::invalid(
                &self.id,
                "id must contain only lowercase ASCII letters, digits and '_'",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid(&self.id, "name is empty"));
        }
        if self.category.trim().is_empty() {
            return Err(CatalogError::invalid(&self.id, "category is empty"));
        }
        if self.summary.trim().is_empty() {
            return Err(CatalogError::invalid(&self.id, "summary is empty"));
        }

        let mut names = HashSet::new();
        for parameter in &self.parameters {
            if parameter.name.is_empty() {
                return Err(CatalogError::invalid(&self.id, "parameter name is empty"));
            }
            if !names.insert(parameter.name.as_str()) {
                return Err(CatalogError::invalid(
                    &self.id,
                    format!("parameter '{}' is declared twice", parameter.name),
                ));
            }
            parameter.kind.check().map_err(|reason| {
                CatalogError::invalid(
                    &self.id,
                    format!("parameter '{}': {}", parameter.name, reason),
                )
            })?;
        }

        if self.source_refs.iter().any(|s| s.trim().is_empty()) {
            return Err(CatalogError::invalid(&self.id, "empty source reference"));
        }

        Ok(())
    }
}
