// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `oshpaz serve` command implementation.
//!
//! Wires the storefront state (order log, catalog documents, admin
//! list, rate limiter) and runs the HTTP gateway until the process is
//! stopped.

use std::sync::Arc;
use std::time::Duration;

use oshpaz_config::OshpazConfig;
use oshpaz_core::OshpazError;
use oshpaz_gateway::{AdminList, GatewayState, RateLimiter, ServerConfig, start_server};
use oshpaz_store::{JsonDocument, OrderLog};
use tracing::{info, warn};

/// Runs the `oshpaz serve` command.
pub async fn run_serve(config: OshpazConfig) -> Result<(), OshpazError> {
    info!(
        service = %config.service.name,
        data_dir = %config.storage.data_dir,
        "starting oshpaz serve"
    );

    let admins = AdminList::new(config.telegram.admin_chat_ids.clone());
    if !admins.is_configured() {
        warn!("no admin chat ids configured; admin endpoints accept any user");
    }

    let limiter = Arc::new(RateLimiter::new(
        config.http.rate_limit_max_requests,
        Duration::from_secs(config.http.rate_limit_window_secs),
    ));
    let _sweeper = limiter.spawn_sweeper();

    let state = GatewayState {
        orders: Arc::new(OrderLog::new(config.storage.orders_file())),
        products: JsonDocument::new(config.storage.products_file()),
        banners: JsonDocument::new(config.storage.banners_file()),
        hero: JsonDocument::new(config.storage.hero_file()),
        admins,
        limiter,
    };

    let server = ServerConfig {
        host: config.http.host.clone(),
        port: config.http.port,
    };
    start_server(&server, state).await
}
