use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{build_openapi, MountPathModifier, SwaggerInfoModifier};
use crate::features::geo::{routes as geo_routes, GeoService};

// Simple health check endpoint (no auth required)
async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Swagger UI and the OpenAPI document, behind basic auth when configured
pub fn swagger_router(app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let openapi = build_openapi(
        SwaggerInfoModifier {
            title: swagger.title.clone(),
            version: swagger.version.clone(),
            description: swagger.description.clone(),
        },
        MountPathModifier {
            mount_path: app.mount_path.clone(),
        },
    );

    let ui = Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        ui.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        ui
    }
}

/// Mount the resource routes under `mount_path` ("" mounts at the root)
pub fn mount(mount_path: &str, resources: Router) -> Router {
    if mount_path.is_empty() {
        Router::new().merge(resources)
    } else {
        Router::new().nest(mount_path, resources)
    }
}

/// Full application router with the request id, tracing and CORS layers
pub fn build_app(app: &AppConfig, geo_service: Arc<GeoService>, swagger: Router) -> Router {
    let health_route = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(swagger)
        .merge(mount(&app.mount_path, geo_routes::routes(geo_service)))
        .merge(health_route)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(app.cors_allowed_origins.clone())),
        )
}
