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

//! Serves the generated OpenAPI document

use super::{ApiError, AppState};
use crate::openapi;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

/// GET /openapi.json
///
/// Regenerated per request from the shared catalog.
pub async fn get_schema(State(state): State<AppState>) -> Result<Response, ApiError> {
    let document = openapi::generate(&state.catalog, &state.info);
    let body = serde_json::to_vec(&document)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
