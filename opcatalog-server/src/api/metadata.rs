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

//! Service description, also used as the health-check target

use super::AppState;
use axum::{extract::State, Json};
use opcatalog_core::CategoryIndex;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub name: String,
    pub description: String,
    pub version: String,
    pub operation_count: usize,
    pub categories: CategoryIndex,
    pub documentation: DocumentationRefs,
}

#[derive(Debug, Serialize)]
pub struct DocumentationRefs {
    pub technical: String,
    pub source_docs: Vec<String>,
}

/// GET /metadata
pub async fn get_metadata(State(state): State<AppState>) -> Json<MetadataResponse> {
    let info = &state.info;
    Json(MetadataResponse {
        name: info.name.clone(),
        description: info.description.clone(),
        version: info.version.clone(),
        operation_count: state.catalog.len(),
        categories: state.catalog.categories(),
        documentation: DocumentationRefs {
            technical: info.technical_documentation.clone(),
            source_docs: info.source_docs.clone(),
        },
    })
}
