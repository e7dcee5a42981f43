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

//! Category Index
//!
//! Derived view over the catalog: operations grouped by category, in order
//! of first occurrence. Never stored, always recomputed from the records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::operation::OperationRecord;

/// One category and the operations carrying it
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
    /// Member operation ids in catalog order
    pub operations: Vec<String>,
}

/// Category name to count mapping, first-occurrence ordered
///
/// Serializes as a JSON object `{"<category>": <count>, ...}`. Use
/// [`CategoryIndex::details`] for the per-category member lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<CategorySummary>,
}

impl CategoryIndex {
    /// Group records by category
    pub fn summarize<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a OperationRecord>,
    {
        let mut entries: Vec<CategorySummary> = Vec::new();
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for record in records {
            let slot = *positions.entry(record.category.as_str()).or_insert_with(|| {
                entries.push(CategorySummary {
                    name: record.category.clone(),
                    count: 0,
                    operations: Vec::new(),
                });
                entries.len() - 1
            });
            let entry = &mut entries[slot];
            entry.count += 1;
            entry.operations.push(record.id.clone());
        }

        Self { entries }
    }

    /// Count for one category, if present
    pub fn count(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.count)
    }

    /// `(name, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.count))
    }

    pub fn details(&self) -> &[CategorySummary] {
        &self.entries
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of cataloged operations
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl Serialize for CategoryIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.count)?;
        }
        map.end()
    }
}
