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

//! Opcatalog Server
//!
//! Read-only HTTP service exposing the operation catalog:
//! - `/metadata`, `/operations`, `/operations/:operation_id`, `/categories`
//! - `/openapi.json`, generated from the same catalog

pub mod api;
pub mod config;
pub mod openapi;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::{catalog_router, AppState};
use config::{LogFormat, LoggingConfig, ServerConfig};
use opcatalog_core::{builtin_service_info, Catalog};

pub const DEFAULT_LOG_FILTER: &str = "opcatalog_server=info,tower_http=info";

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(config.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    if !config.server.enable_cors {
        return Ok(CorsLayer::new());
    }

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let origins = config.cors_origins()?;
    if origins.is_empty() {
        tracing::warn!("CORS: Allowing all origins. Set cors_origins to restrict them");
        Ok(cors.allow_origin(Any))
    } else {
        tracing::info!("CORS: Allowing origins: {:?}", config.server.cors_origins);
        Ok(cors.allow_origin(AllowOrigin::list(origins)))
    }
}

/// Wrap `router` in the timeout, CORS and trace layers
pub fn with_middleware(router: Router, config: &ServerConfig) -> Result<Router> {
    Ok(router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

/// Assemble the application router with its middleware stack
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router> {
    with_middleware(catalog_router().with_state(state), config)
}

/// Pretty-printed OpenAPI document for the built-in catalog
pub fn render_openapi() -> Result<String> {
    let catalog = Catalog::builtin().context("built-in operation definitions are invalid")?;
    let document = openapi::generate(&catalog, &builtin_service_info());
    Ok(serde_json::to_string_pretty(&document)?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Run the catalog server until a shutdown signal arrives
pub async fn run_server(config: ServerConfig) -> Result<()> {
    init_tracing(&config.logging)?;

    tracing::info!("Starting Opcatalog Server");
    tracing::debug!("Configuration: {:#?}", config);

    config.validate()?;

    let catalog = Catalog::builtin().context("built-in operation definitions are invalid")?;
    let categories = catalog.categories();
    tracing::info!(
        "Catalog loaded: {} operations in {} categories",
        catalog.len(),
        categories.len()
    );
    for (name, count) in categories.iter() {
        tracing::debug!(category = name, count, "Category");
    }

    let state = AppState::new(catalog, builtin_service_info());
    let app = build_app(state, &config)?;

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("HTTP API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
