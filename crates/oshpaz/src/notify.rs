// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `oshpaz notify` command implementation.
//!
//! Runs the chat-bot process: the admin relay announcing new orders
//! and the status relay telling customers about status changes. Both
//! poll the shared order log on the configured interval.

use std::sync::Arc;
use std::time::Duration;

use oshpaz_config::OshpazConfig;
use oshpaz_core::{HealthStatus, NotifyChannel, OshpazError};
use oshpaz_relay::{AdminRelay, StatusRelay};
use oshpaz_store::OrderLog;
use oshpaz_telegram::TelegramNotifier;
use tracing::{info, warn};

/// Runs the `oshpaz notify` command.
pub async fn run_notify(config: OshpazConfig) -> Result<(), OshpazError> {
    info!(
        service = %config.service.name,
        data_dir = %config.storage.data_dir,
        "starting oshpaz notify"
    );

    let notifier = Arc::new(TelegramNotifier::new(&config.telegram)?);
    match notifier.health_check().await? {
        HealthStatus::Healthy => info!("Telegram bot reachable"),
        HealthStatus::Degraded(msg) | HealthStatus::Unhealthy(msg) => {
            // The relays retry every tick, so start anyway.
            warn!(detail = %msg, "Telegram bot health check failed");
        }
    }

    let log = Arc::new(OrderLog::new(config.storage.orders_file()));
    let poll_interval = Duration::from_secs(config.notifier.poll_interval_secs);
    let recency_window = Duration::from_secs(config.notifier.recency_window_secs);

    let status_relay = StatusRelay::new(log.clone(), notifier.clone(), recency_window);

    match config.telegram.admin_chat_ids.first() {
        Some(admin_chat) => {
            let admin_relay = AdminRelay::new(
                log.clone(),
                notifier.clone(),
                admin_chat.clone(),
                recency_window,
            );
            tokio::join!(
                admin_relay.run(poll_interval),
                status_relay.run(poll_interval)
            );
        }
        None => {
            warn!("no admin chat ids configured; new orders will not be announced");
            status_relay.run(poll_interval).await;
        }
    }

    Ok(())
}
