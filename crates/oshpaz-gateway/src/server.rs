// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The API routes sit
//! behind the rate limiter; `/health` stays open for the platform
//! health probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::HeaderValue;
use axum::middleware::{self as axum_middleware, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use oshpaz_core::types::{Banner, Hero, Product};
use oshpaz_core::OshpazError;
use oshpaz_store::{JsonDocument, OrderLog};
use tower_http::cors::CorsLayer;

use crate::auth::AdminList;
use crate::handlers;
use crate::ratelimit::{self, RateLimiter};

/// Request bodies above this size are rejected outright.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The shared order log, also read by the notifier process.
    pub orders: Arc<OrderLog>,
    /// Product catalog document.
    pub products: JsonDocument<Vec<Product>>,
    /// Banner set document.
    pub banners: JsonDocument<Vec<Banner>>,
    /// Hero block document.
    pub hero: JsonDocument<Hero>,
    /// Admin user ids.
    pub admins: AdminList,
    /// Per-client request limiter for the API routes.
    pub limiter: Arc<RateLimiter>,
}

/// Gateway server configuration (mirrors HttpConfig from oshpaz-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "x-xss-protection",
        HeaderValue::from_static("1; mode=block"),
    );
    response
}

/// Builds the full gateway router over the given state.
pub fn build_router(state: GatewayState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/api/check-admin", post(handlers::post_check_admin))
        .route(
            "/api/products",
            get(handlers::get_products).post(handlers::post_products),
        )
        .route(
            "/api/banners",
            get(handlers::get_banners).post(handlers::post_banners),
        )
        .route("/api/hero", get(handlers::get_hero).post(handlers::post_hero))
        .route(
            "/api/orders",
            get(handlers::get_orders).post(handlers::submit_order),
        )
        .route(
            "/api/orders/{order_id}/status",
            post(handlers::update_status),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            ratelimit::rate_limit_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(security_headers))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Starts the gateway HTTP server and serves until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), OshpazError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| OshpazError::channel(format!("failed to bind gateway to {addr}: {e}"), e))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| OshpazError::channel(format!("gateway server error: {e}"), e))?;

    Ok(())
}
