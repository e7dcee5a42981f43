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

//! Catalog Store
//!
//! Holds every [`OperationRecord`] in registration order plus an id index for
//! O(1) lookups. The whole definition set is validated when the catalog is
//! built and the catalog is read-only afterwards, so it can be shared across
//! request tasks behind an `Arc` without locking.

use std::collections::HashMap;
use tracing::debug;

use crate::category::CategoryIndex;
use crate::definitions;
use crate::error::{CatalogError, Result};
use crate::operation::OperationRecord;

/// Immutable registry of operation records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Records in registration order
    operations: Vec<OperationRecord>,
    /// id -> position in `operations`
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a definition set, rejecting the whole set on the
    /// first invalid or duplicate record.
    pub fn new(operations: Vec<OperationRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(operations.len());

        for (position, operation) in operations.iter().enumerate() {
            operation.validate()?;
            if by_id.insert(operation.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: operation.id.clone(),
                });
            }
        }

        debug!(operations = operations.len(), "Catalog built");
        Ok(Self { operations, by_id })
    }

    /// The fixed definition set shipped with the service
    pub fn builtin() -> Result<Self> {
        Self::new(definitions::builtin_operations())
    }

    /// Catalog with no operations
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact-match lookup
    pub fn get(&self, id: &str) -> Result<&OperationRecord> {
        self.by_id
            .get(id)
            .map(|&position| &self.operations[position])
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All records in registration order
    pub fn list_all(&self) -> &[OperationRecord] {
        &self.operations
    }

    /// Records whose category equals `category` exactly; empty when none match
    pub fn list_by_category(&self, category: &str) -> Vec<&OperationRecord> {
        self.operations
            .iter()
            .filter(|op| op.category == category)
            .collect()
    }

    /// Ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|op| op.id.as_str())
    }

    /// Recompute the category summary
    pub fn categories(&self) -> CategoryIndex {
        CategoryIndex::summarize(&self.operations)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{ParamKind, Parameter};

    fn scenario() -> Catalog {
        Catalog::new(vec![
            OperationRecord::new(
                "authenticate_with_token",
                "Authenticate with user token",
                "Authentication and runtime",
                "Retrieve and present a user token.",
            )
            .with_parameter(Parameter::required("token", ParamKind::String, "User token.")),
            OperationRecord::new(
                "send_message",
                "Send message",
                "Messaging and commands",
                "Dispatch a message to a channel.",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_existing() {
        let catalog = scenario();
        let record = catalog.get("send_message").unwrap();
        assert_eq!(record.id, "send_message");
        assert!(catalog.contains("authenticate_with_token"));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let catalog = scenario();
        assert_eq!(
            catalog.get("unknown_op").unwrap_err(),
            CatalogError::NotFound {
                id: "unknown_op".to_string()
            }
        );
        // no prefix or case-insensitive matching
        assert!(catalog.get("send").is_err());
        assert!(catalog.get("SEND_MESSAGE").is_err());
    }

    #[test]
    fn test_list_all_keeps_registration_order() {
        let catalog = scenario();
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec!["authenticate_with_token", "send_message"]);
        assert_eq!(catalog.list_all().len(), 2);
    }

    #[test]
    fn test_list_by_category() {
        let catalog = scenario();
        let messaging = catalog.list_by_category("Messaging and commands");
        assert_eq!(messaging.len(), 1);
        assert_eq!(messaging[0].id, "send_message");
        assert!(catalog.list_by_category("messaging").is_empty());
    }

    #[test]
    fn test_categories_match_scenario() {
        let index = scenario().categories();
        let pairs: Vec<_> = index.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Authentication and runtime", 1),
                ("Messaging and commands", 1)
            ]
        );
    }

    #[test]
    fn test_duplicate_id_fails_construction() {
        let op = OperationRecord::new("run_client", "Run", "runtime", "Start the client.");
        let err = Catalog::new(vec![op.clone(), op]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                id: "run_client".to_string()
            }
        );
        assert!(err.is_startup_failure());
    }

    #[test]
    fn test_invalid_record_fails_construction() {
        let bad = OperationRecord::new("run_client", "Run", "", "Start the client.");
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(CatalogError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.get("anything").is_err());

        let built = Catalog::new(Vec::new()).unwrap();
        assert_eq!(built.len(), 0);
    }
}
