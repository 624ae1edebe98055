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

pub mod api;
pub mod config;

use anyhow::Result;
use axum::{http::HeaderValue, Router};
use opcatalog_core::{OperationRegistry, ServiceInfo};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{catalog_router, AppState};
use config::{HttpServerConfig, LoggingConfig, ServerConfig};

pub async fn run_server(config: ServerConfig) -> Result<()> {
    init_tracing(&config.logging);

    tracing::info!("Starting Opcatalog Server");
    tracing::info!("Configuration: {:#?}", config);

    config.validate()?;

    let registry = OperationRegistry::builtin()?;
    let service = ServiceInfo::builtin();
    tracing::info!(
        "Serving {} v{} with {} operations",
        service.title,
        service.version,
        registry.len()
    );

    let state = AppState::new(registry, service, config.site.index_file.clone());
    let app = build_app(state, &config)?;

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Full application: catalog routes plus middleware
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router> {
    let mut app = catalog_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(cors_layer(&config.server)?),
    );

    if config.server.enable_compression {
        app = app.layer(CompressionLayer::new());
    }

    Ok(app)
}

/// CORS policy for browser clients
pub fn cors_layer(config: &HttpServerConfig) -> Result<CorsLayer> {
    if !config.enable_cors {
        return Ok(CorsLayer::new());
    }

    let wildcard = config.cors_origins.iter().any(|origin| origin == "*");
    if !config.cors_origins.is_empty() && !wildcard {
        let origins = config
            .cors_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::info!("CORS: Allowing origins: {:?}", config.cors_origins);

        return Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(config.allow_credentials));
    }

    if config.allow_credentials {
        tracing::info!("CORS: Mirroring request origin with credentials allowed");
        Ok(CorsLayer::very_permissive())
    } else {
        tracing::info!("CORS: Allowing all origins");
        Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.filter.as_str().into());

    let (plain, json) = if config.json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
