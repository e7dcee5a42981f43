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

//! Operation listing and lookup

use super::{ApiError, AppState};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use opcatalog_core::OperationRecord;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct OperationsQuery {
    /// Exact category name; all operations when absent
    pub category: Option<String>,
}

/// GET /operations
pub async fn list_operations(
    State(state): State<AppState>,
    query: Result<Query<OperationsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let records: Vec<&OperationRecord> = match query.category.as_deref() {
        Some(category) => state.catalog.list_by_category(category),
        None => state.catalog.list_all().iter().collect(),
    };

    Ok(Json(records).into_response())
}

/// GET /operations/:operation_id
pub async fn get_operation(
    State(state): State<AppState>,
    operation_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(operation_id) = operation_id?;
    let record = state.catalog.get(&operation_id)?;
    Ok(Json(record).into_response())
}
