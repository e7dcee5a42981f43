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

use serde::{Deserialize, Serialize};

/// Static description of the catalog service itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub description: String,
    pub version: String,
    /// Path of the long-form technical documentation
    pub technical_documentation: String,
    /// Upstream documents the operation records cite
    pub source_docs: Vec<String>,
}

impl ServiceInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            technical_documentation: String::new(),
            source_docs: Vec::new(),
        }
    }

    pub fn with_technical_documentation(mut self, path: impl Into<String>) -> Self {
        self.technical_documentation = path.into();
        self
    }

    pub fn with_source_doc(mut self, doc: impl Into<String>) -> Self {
        self.source_docs.push(doc.into());
        self
    }
}
