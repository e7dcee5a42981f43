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

//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised by the catalog store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Lookup for an id with no matching record
    #[error("Operation not found: {id}")]
    NotFound { id: String },

    /// Two definitions share the same id
    #[error("Duplicate operation id: {id}")]
    DuplicateId { id: String },

    /// A definition failed construction-time validation
    #[error("Invalid operation definition '{id}': {reason}")]
    InvalidOperation { id: String, reason: String },
}

impl CatalogError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidOperation {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors that can only come from a broken definition set.
    ///
    /// These are fatal: a process that hits one while building its catalog
    /// must not serve traffic.
    pub fn is_startup_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateId { .. } | CatalogError::InvalidOperation { .. }
        )
    }
}
