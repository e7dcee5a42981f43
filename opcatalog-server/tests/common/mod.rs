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

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use opcatalog_core::{Catalog, OperationRecord, ParamKind, Parameter, ServiceInfo};
use opcatalog_server::{api::AppState, build_app, config::ServerConfig};
use tower::ServiceExt;

pub fn app(catalog: Catalog) -> Router {
    let info = ServiceInfo::new("Test Catalog", "Catalog used by integration tests", "0.0.1")
        .with_technical_documentation("docs/technical_documentation.md")
        .with_source_doc("README.rst");
    build_app(AppState::new(catalog, info), &ServerConfig::default()).unwrap()
}

/// The two-operation catalog used across the HTTP contract tests
pub fn two_operation_catalog() -> Catalog {
    Catalog::new(vec![
        OperationRecord::new(
            "authenticate_with_token",
            "Authenticate with token",
            "Authentication and runtime",
            "Log in with a user token.",
        )
        .with_parameter(Parameter::required(
            "token",
            ParamKind::String,
            "User account token.",
        ))
        .with_source("docs/authenticating.rst"),
        OperationRecord::new(
            "send_message",
            "Send message",
            "Messaging and commands",
            "Send a message to a channel.",
        )
        .with_parameter(Parameter::required(
            "channel_id",
            ParamKind::String,
            "Target channel.",
        ))
        .with_parameter(Parameter::required(
            "content",
            ParamKind::String,
            "Message text.",
        )),
    ])
    .unwrap()
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
