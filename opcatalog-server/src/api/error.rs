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

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use opcatalog_core::CatalogError;
use serde::Serialize;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Operation not found: {id}")]
    NotFound { id: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { id } => ApiError::NotFound { id },
            // only reachable if a broken catalog escaped startup validation
            other => {
                debug_assert!(other.is_startup_failure());
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Wire shape of error bodies: `{"error": "not_found", "id": ...}`
#[derive(Debug, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
enum ErrorBody {
    NotFound { id: String },
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound { id } => {
                tracing::debug!(operation_id = %id, "Operation lookup missed");
                (StatusCode::NOT_FOUND, ErrorBody::NotFound { id })
            }
            ApiError::BadRequest { message } => {
                tracing::debug!(error = %message, "Rejected request");
                (StatusCode::BAD_REQUEST, ErrorBody::BadRequest { message })
            }
            ApiError::Serialization(err) => {
                tracing::error!(error = %err, "Failed to serialize response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::Internal {
                        message: err.to_string(),
                    },
                )
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::Internal { message },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
