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

//! Category summary, either as counts or with member ids

use super::{ApiError, AppState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    /// Return `[{name, count, operations}]` instead of the count map
    #[serde(default)]
    pub detailed: bool,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    query: Result<Query<CategoriesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let index = state.catalog.categories();
    if query.detailed {
        Ok(Json(index.details()).into_response())
    } else {
        Ok(Json(index).into_response())
    }
}
