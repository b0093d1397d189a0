// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the storefront REST API.
//!
//! Every response carries a `success` flag; error bodies use fixed
//! generic strings so internal detail never leaks to the client. The
//! real cause is logged server-side.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use oshpaz_core::{Order, OrderDraft, OrderStatus, sanitize, validate};

use crate::server::GatewayState;

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

fn storage_failure(action: &str, e: oshpaz_core::OshpazError) -> Response {
    warn!(error = %e, "storage failure during {action}");
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("Failed to {action}"),
    )
}

/// GET /health
pub async fn get_health() -> Response {
    Json(json!({
        "status": "ok",
        "service": "oshpaz-gateway",
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAdminRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// POST /api/check-admin
pub async fn post_check_admin(
    State(state): State<GatewayState>,
    Json(body): Json<CheckAdminRequest>,
) -> Response {
    let Some(user_id) = body.user_id.filter(|id| !id.is_empty()) else {
        return error_body(StatusCode::BAD_REQUEST, "User ID required");
    };
    Json(json!({ "success": true, "isAdmin": state.admins.is_admin(&user_id) })).into_response()
}

/// GET /api/products
pub async fn get_products(State(state): State<GatewayState>) -> Response {
    match state.products.read().await {
        Ok(products) => {
            Json(json!({ "success": true, "products": products.unwrap_or_default() }))
                .into_response()
        }
        Err(e) => storage_failure("load products", e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductsRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub products: Vec<oshpaz_core::types::Product>,
}

/// POST /api/products
pub async fn post_products(
    State(state): State<GatewayState>,
    Json(body): Json<SaveProductsRequest>,
) -> Response {
    let Some(user_id) = body.user_id.filter(|id| !id.is_empty()) else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid user ID");
    };
    if !state.admins.is_admin(&user_id) {
        return error_body(StatusCode::FORBIDDEN, "Access denied");
    }
    if let Err(e) = validate::validate_products(&body.products) {
        warn!(error = %e, "products rejected");
        return error_body(StatusCode::BAD_REQUEST, "Invalid products data");
    }
    let clean = sanitize::sanitize_products(body.products);
    match state.products.write(&clean).await {
        Ok(()) => Json(json!({ "success": true, "message": "Products saved" })).into_response(),
        Err(e) => storage_failure("save products", e),
    }
}

/// GET /api/banners
pub async fn get_banners(State(state): State<GatewayState>) -> Response {
    match state.banners.read().await {
        Ok(banners) => {
            Json(json!({ "success": true, "banners": banners.unwrap_or_default() }))
                .into_response()
        }
        Err(e) => storage_failure("load banners", e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBannersRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub banners: Vec<oshpaz_core::types::Banner>,
}

/// POST /api/banners
pub async fn post_banners(
    State(state): State<GatewayState>,
    Json(body): Json<SaveBannersRequest>,
) -> Response {
    let Some(user_id) = body.user_id.filter(|id| !id.is_empty()) else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid user ID");
    };
    if !state.admins.is_admin(&user_id) {
        return error_body(StatusCode::FORBIDDEN, "Access denied");
    }
    if let Err(e) = validate::validate_banners(&body.banners) {
        warn!(error = %e, "banners rejected");
        return error_body(StatusCode::BAD_REQUEST, "Invalid banners data");
    }
    let clean = sanitize::sanitize_banners(body.banners);
    match state.banners.write(&clean).await {
        Ok(()) => Json(json!({ "success": true, "message": "Banners saved" })).into_response(),
        Err(e) => storage_failure("save banners", e),
    }
}

/// GET /api/hero
pub async fn get_hero(State(state): State<GatewayState>) -> Response {
    match state.hero.read().await {
        Ok(hero) => Json(json!({ "success": true, "hero": hero })).into_response(),
        Err(e) => storage_failure("load hero settings", e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveHeroRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub hero: oshpaz_core::types::Hero,
}

/// POST /api/hero
pub async fn post_hero(
    State(state): State<GatewayState>,
    Json(body): Json<SaveHeroRequest>,
) -> Response {
    let Some(user_id) = body.user_id.filter(|id| !id.is_empty()) else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid user ID");
    };
    if !state.admins.is_admin(&user_id) {
        return error_body(StatusCode::FORBIDDEN, "Access denied");
    }
    let clean = sanitize::sanitize_hero(body.hero);
    match state.hero.write(&clean).await {
        Ok(()) => {
            Json(json!({ "success": true, "message": "Hero settings saved" })).into_response()
        }
        Err(e) => storage_failure("save hero settings", e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// GET /api/orders (admin only)
pub async fn get_orders(
    State(state): State<GatewayState>,
    Query(query): Query<OrdersQuery>,
) -> Response {
    if !state.admins.is_admin(query.user_id.as_deref().unwrap_or("")) {
        return error_body(StatusCode::FORBIDDEN, "Access denied");
    }
    match state.orders.read_all().await {
        Ok(orders) => Json(json!({ "success": true, "orders": orders })).into_response(),
        Err(e) => storage_failure("load orders", e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// POST /api/orders/{order_id}/status (admin only)
///
/// Moves an order to a new status and stamps `updatedAt`. The
/// `statusNotified` flag is never reset here: a status change racing an
/// unannounced earlier change stays a single notification.
pub async fn update_status(
    State(state): State<GatewayState>,
    Path(order_id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Response {
    let Some(user_id) = body.user_id.filter(|id| !id.is_empty()) else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid user ID");
    };
    if !state.admins.is_admin(&user_id) {
        return error_body(StatusCode::FORBIDDEN, "Access denied");
    }
    let Some(status) = body
        .status
        .as_deref()
        .and_then(|s| OrderStatus::from_str(s).ok())
    else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid order status");
    };

    let updated = state
        .orders
        .update(&order_id, |order| {
            if order.status != status {
                order.status = status;
                order.updated_at = Some(Utc::now());
            }
        })
        .await;

    match updated {
        Ok(Some(order)) => {
            info!(order_id = %order.id, status = %order.status, "order status updated");
            Json(json!({ "success": true, "order": order })).into_response()
        }
        Ok(None) => error_body(StatusCode::NOT_FOUND, "Order not found"),
        Err(e) => storage_failure("update order", e),
    }
}

/// POST /api/orders
///
/// The order intake pipeline: parse, validate, cross-check the total,
/// sanitize, assign an id, persist. The notifier process picks the
/// saved order up from the log on its own schedule.
pub async fn submit_order(
    State(state): State<GatewayState>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    let draft: OrderDraft = match serde_json::from_value(payload) {
        Ok(draft) => draft,
        Err(e) => {
            warn!(error = %e, "order payload failed to parse");
            return error_body(StatusCode::BAD_REQUEST, "Invalid order data");
        }
    };

    if let Err(e) = validate::validate_draft(&draft).and_then(|()| validate::check_total(&draft)) {
        warn!(error = %e, "order rejected");
        return error_body(StatusCode::BAD_REQUEST, "Invalid order data");
    }

    let draft = sanitize::sanitize_draft(draft);
    let order_id = uuid::Uuid::new_v4().to_string();
    let order = Order::from_draft(order_id.clone(), draft, Utc::now());

    match state.orders.append(order).await {
        Ok(()) => {
            info!(order_id = %order_id, "new order saved");
            Json(json!({
                "success": true,
                "orderId": order_id,
                "message": "Order received",
            }))
            .into_response()
        }
        Err(e) => storage_failure("save order", e),
    }
}
