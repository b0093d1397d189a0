// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notification channel for deterministic testing.
//!
//! `MockChannel` implements `NotifyChannel` with captured outbound
//! notices for assertion in tests, plus an injectable failure mode for
//! exercising delivery-error paths.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use oshpaz_core::traits::NotifyChannel;
use oshpaz_core::types::{HealthStatus, MessageId, OutboundNotice};
use oshpaz_core::OshpazError;

/// A mock chat channel for testing.
///
/// Notices passed to `send()` are captured and retrievable via
/// `sent_notices()`. When failing mode is on, `send()` returns a
/// channel error; the attempt is still counted via `attempt_count()`.
pub struct MockChannel {
    sent: Arc<Mutex<Vec<OutboundNotice>>>,
    attempts: AtomicUsize,
    failing: AtomicBool,
}

impl MockChannel {
    /// Create a new mock channel with an empty capture queue.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            attempts: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Make subsequent `send()` calls fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// All notices successfully sent through `send()`.
    pub async fn sent_notices(&self) -> Vec<OutboundNotice> {
        self.sent.lock().await.clone()
    }

    /// Count of successfully sent notices.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Count of send attempts, including failed ones.
    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Clear all captured notices.
    pub async fn clear_sent(&self) {
        self.sent.lock().await.clear();
    }
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifyChannel for MockChannel {
    fn name(&self) -> &str {
        "mock-channel"
    }

    async fn health_check(&self) -> Result<HealthStatus, OshpazError> {
        Ok(HealthStatus::Healthy)
    }

    async fn send(&self, notice: OutboundNotice) -> Result<MessageId, OshpazError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(OshpazError::Channel {
                message: "mock channel failing".to_string(),
                source: None,
            });
        }
        let id = format!("mock-msg-{}", uuid::Uuid::new_v4());
        self.sent.lock().await.push(notice);
        Ok(MessageId(id))
    }
}
