// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin notification relay.
//!
//! Scans the shared order log on a fixed interval for fresh orders the
//! admin has not been told about, announces each through the chat
//! channel, and flips `notifiedToAdmin` in the log. The flag is set
//! after an *attempted* send, so a failed send is not retried on the
//! next tick; see DESIGN.md for the open questions around this and the
//! recency window.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use oshpaz_core::{NotifyChannel, OrderStatus, OshpazError, OutboundNotice};
use oshpaz_store::OrderLog;
use tracing::{error, info, warn};

use crate::message;

/// Relay announcing newly received orders to the admin chat.
pub struct AdminRelay<C> {
    log: Arc<OrderLog>,
    channel: Arc<C>,
    admin_chat: String,
    recency_window: chrono::Duration,
}

impl<C: NotifyChannel> AdminRelay<C> {
    /// Creates a relay delivering to the given admin chat id.
    pub fn new(
        log: Arc<OrderLog>,
        channel: Arc<C>,
        admin_chat: impl Into<String>,
        recency_window: Duration,
    ) -> Self {
        Self {
            log,
            channel,
            admin_chat: admin_chat.into(),
            recency_window: chrono::Duration::from_std(recency_window)
                .unwrap_or_else(|_| chrono::Duration::seconds(60)),
        }
    }

    /// One scan of the log. Returns how many orders were processed,
    /// meaning a send was attempted and the flag set; a failed send
    /// still counts.
    ///
    /// Matches orders that are still `new`, not yet announced, and
    /// created within the recency window. Orders older than the window
    /// are never announced (restart-backlog protection).
    pub async fn tick(&self) -> Result<usize, OshpazError> {
        let cutoff = Utc::now() - self.recency_window;
        let orders = self.log.read_all().await?;
        let mut processed = 0;

        for order in orders.into_iter().filter(|o| {
            o.status == OrderStatus::New && !o.notified_to_admin && o.created_at > cutoff
        }) {
            let notice = OutboundNotice {
                recipient: self.admin_chat.clone(),
                text: message::admin_announcement(&order),
            };
            match self.channel.send(notice).await {
                Ok(_) => info!(order_id = %order.id, "order announced to admin"),
                Err(e) => {
                    warn!(order_id = %order.id, error = %e, "admin announcement failed")
                }
            }
            // Re-read and flip the flag by id: the log may have been
            // rewritten by the HTTP process while we were sending.
            self.log
                .update(&order.id, |o| o.notified_to_admin = true)
                .await?;
            processed += 1;
        }

        Ok(processed)
    }

    /// Runs the relay until the process exits.
    pub async fn run(self, poll_interval: Duration) {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        info!(
            interval_secs = poll_interval.as_secs(),
            "admin relay started"
        );
        loop {
            ticker.tick().await;
            if let Err(e) = self.tick().await {
                error!(error = %e, "admin relay tick failed");
            }
        }
    }
}
