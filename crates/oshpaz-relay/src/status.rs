// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer status notification relay.
//!
//! Same cadence and structure as the admin relay, but watches for
//! status changes: orders with a chat recipient whose status has moved
//! past `new`, not yet announced, updated within the recency window.
//! `statusNotified` is a boolean, so a second status change before the
//! first was announced is silently dropped (open question in
//! DESIGN.md; the fix would compare a last-announced status instead).

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use oshpaz_core::{NotifyChannel, OrderStatus, OshpazError, OutboundNotice};
use oshpaz_store::OrderLog;
use tracing::{error, info, warn};

use crate::message;

/// Relay announcing status changes to the ordering customer.
pub struct StatusRelay<C> {
    log: Arc<OrderLog>,
    channel: Arc<C>,
    recency_window: chrono::Duration,
}

impl<C: NotifyChannel> StatusRelay<C> {
    pub fn new(log: Arc<OrderLog>, channel: Arc<C>, recency_window: Duration) -> Self {
        Self {
            log,
            channel,
            recency_window: chrono::Duration::from_std(recency_window)
                .unwrap_or_else(|_| chrono::Duration::seconds(60)),
        }
    }

    /// One scan of the log. Returns how many orders were processed,
    /// meaning a send was attempted and the flag set; a failed send
    /// still counts.
    pub async fn tick(&self) -> Result<usize, OshpazError> {
        let cutoff = Utc::now() - self.recency_window;
        let orders = self.log.read_all().await?;
        let mut processed = 0;

        for order in orders.into_iter().filter(|o| {
            o.telegram_user_id.is_some()
                && o.status != OrderStatus::New
                && !o.status_notified
                && o.updated_at.is_some_and(|t| t > cutoff)
        }) {
            let recipient = order
                .telegram_user_id
                .clone()
                .unwrap_or_default();
            let notice = OutboundNotice {
                recipient,
                text: message::status_announcement(&order),
            };
            match self.channel.send(notice).await {
                Ok(_) => info!(
                    order_id = %order.id,
                    status = %order.status,
                    "status announced to customer"
                ),
                Err(e) => {
                    warn!(order_id = %order.id, error = %e, "status announcement failed")
                }
            }
            self.log
                .update(&order.id, |o| o.status_notified = true)
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
            "status relay started"
        );
        loop {
            ticker.tick().await;
            if let Err(e) = self.tick().await {
                error!(error = %e, "status relay tick failed");
            }
        }
    }
}
