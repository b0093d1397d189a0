// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resilient order submission pipeline.
//!
//! Submission is a bounded state machine over attempts: POST with a
//! 10 second timeout, linear backoff between attempts, and after the
//! final failure the order is parked in the pending queue and handed
//! to the fallback transport so it is never silently lost. The caller
//! treats `Queued` as a confirmation; redelivery happens through
//! [`SubmitClient::reconcile`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use oshpaz_core::{OrderDraft, OshpazError};
use tracing::{info, warn};

use crate::queue::{PendingOrder, PendingQueue};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Out-of-band delivery used when the intake endpoint is unreachable.
#[async_trait]
pub trait FallbackTransport: Send + Sync {
    async fn deliver(&self, draft: &OrderDraft) -> Result<(), OshpazError>;
}

/// How a submission concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The intake endpoint accepted the order.
    Delivered { order_id: String },
    /// All attempts failed; the order sits in the pending queue.
    Queued,
}

/// Result of one reconciliation pass over the pending queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Entries delivered and removed from the queue.
    pub delivered: usize,
    /// Entries still queued for the next pass.
    pub remaining: usize,
}

/// Order submission client with retry, queueing, and reconciliation.
pub struct SubmitClient {
    http: reqwest::Client,
    base_url: String,
    queue: PendingQueue,
    max_attempts: u32,
    base_delay: Duration,
    fallback: Option<Arc<dyn FallbackTransport>>,
}

impl SubmitClient {
    pub fn new(base_url: impl Into<String>, queue: PendingQueue) -> Result<Self, OshpazError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OshpazError::channel(format!("failed to build HTTP client: {e}"), e))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            queue,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            fallback: None,
        })
    }

    /// Overrides the retry policy (attempt count and backoff base).
    pub fn with_retry_policy(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.base_delay = base_delay;
        self
    }

    /// Attaches an out-of-band fallback transport.
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackTransport>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Submits an order, retrying with linear backoff.
    ///
    /// After the final failed attempt the order is parked in the
    /// pending queue and the fallback transport (when configured) gets
    /// one try; its outcome does not change the result. Only a queue
    /// write failure surfaces as an error.
    pub async fn submit(&self, draft: &OrderDraft) -> Result<SubmitOutcome, OshpazError> {
        for attempt in 1..=self.max_attempts {
            match self.post_order(draft).await {
                Ok(order_id) => {
                    info!(order_id = %order_id, "order delivered");
                    return Ok(SubmitOutcome::Delivered { order_id });
                }
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "order submission attempt failed"
                    );
                    if attempt == self.max_attempts {
                        break;
                    }
                    tokio::time::sleep(self.base_delay * attempt).await;
                }
            }
        }

        self.queue.push(PendingOrder::park(draft.clone())).await?;
        info!("order parked in pending queue");

        if let Some(fallback) = &self.fallback {
            if let Err(e) = fallback.deliver(draft).await {
                warn!(error = %e, "fallback delivery failed");
            }
        }

        Ok(SubmitOutcome::Queued)
    }

    /// Walks the pending queue, retrying each entry once.
    ///
    /// Entries that deliver are removed; entries that fail stay queued
    /// untouched for the next pass. Duplicate submission is possible
    /// when a prior attempt succeeded server-side but the confirmation
    /// was lost (there is no idempotency key).
    pub async fn reconcile(&self) -> Result<ReconcileReport, OshpazError> {
        let entries = self.queue.all().await?;
        if entries.is_empty() {
            return Ok(ReconcileReport {
                delivered: 0,
                remaining: 0,
            });
        }

        let mut remaining = Vec::new();
        let mut delivered = 0;
        for entry in entries {
            match self.post_order(&entry.draft).await {
                Ok(order_id) => {
                    info!(order_id = %order_id, "queued order delivered");
                    delivered += 1;
                }
                Err(e) => {
                    warn!(error = %e, "queued order still undeliverable");
                    remaining.push(entry);
                }
            }
        }

        let report = ReconcileReport {
            delivered,
            remaining: remaining.len(),
        };
        self.queue.replace(&remaining).await?;
        Ok(report)
    }

    async fn post_order(&self, draft: &OrderDraft) -> Result<String, OshpazError> {
        let url = format!("{}/api/orders", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| OshpazError::channel(format!("order submission failed: {e}"), e))?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        if !status.is_success() {
            let detail = body["error"].as_str().unwrap_or("server error");
            return Err(OshpazError::Channel {
                message: format!("intake endpoint rejected order ({status}): {detail}"),
                source: None,
            });
        }

        body["orderId"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| OshpazError::Channel {
                message: "intake response carried no order id".into(),
                source: None,
            })
    }
}
