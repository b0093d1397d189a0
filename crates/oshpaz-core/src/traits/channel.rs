// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound notification channel trait (Telegram in production, mock in tests).

use async_trait::async_trait;

use crate::error::OshpazError;
use crate::types::{HealthStatus, MessageId, OutboundNotice};

/// An outbound chat channel the notification relays deliver through.
///
/// The relays never receive messages; inbound chat traffic belongs to the
/// bot menu layer, which is outside this pipeline.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Short channel name used in log fields.
    fn name(&self) -> &str;

    /// Checks whether the channel can currently deliver messages.
    async fn health_check(&self) -> Result<HealthStatus, OshpazError>;

    /// Delivers a notice to its recipient.
    async fn send(&self, notice: OutboundNotice) -> Result<MessageId, OshpazError>;
}
