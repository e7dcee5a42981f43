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

//! HTTP surface of the catalog
//!
//! Every route is a read over the shared [`Catalog`]; there are no writes.

pub mod categories;
pub mod error;
pub mod metadata;
pub mod operations;
pub mod schema;

pub use error::ApiError;

use axum::{routing::get, Router};
use opcatalog_core::{Catalog, ServiceInfo};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(catalog: Catalog, info: ServiceInfo) -> Self {
        Self {
            catalog: Arc::new(catalog),
            info: Arc::new(info),
        }
    }
}

/// Create router for the catalog endpoints
pub fn catalog_router() -> Router<AppState> {
    Router::new()
        .route("/metadata", get(metadata::get_metadata))
        .route("/operations", get(operations::list_operations))
        .route("/operations/:operation_id", get(operations::get_operation))
        .route("/categories", get(categories::list_categories))
        .route("/openapi.json", get(schema::get_schema))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use opcatalog_core::builtin_service_info;
    use tower::ServiceExt;

    pub fn builtin_state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), builtin_service_info())
    }

    /// Issue a GET against a fresh router and decode the JSON body
    pub async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = catalog_router()
            .with_state(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
