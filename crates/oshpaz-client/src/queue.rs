// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The local pending-order queue.
//!
//! Orders that could not be delivered to the intake endpoint are
//! parked here with a timestamp and a retry counter, and drained by
//! [`crate::SubmitClient::reconcile`] on a later run. The queue file
//! uses the same backup-then-write semantics as every other store
//! file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use oshpaz_core::{OrderDraft, OshpazError};
use oshpaz_store::JsonDocument;
use serde::{Deserialize, Serialize};

/// One parked order awaiting redelivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrder {
    #[serde(flatten)]
    pub draft: OrderDraft,
    pub timestamp: DateTime<Utc>,
    pub retries: u32,
}

impl PendingOrder {
    /// Parks a draft with the current time and a zero retry counter.
    pub fn park(draft: OrderDraft) -> Self {
        Self {
            draft,
            timestamp: Utc::now(),
            retries: 0,
        }
    }
}

/// File-backed FIFO of pending orders.
#[derive(Debug, Clone)]
pub struct PendingQueue {
    doc: JsonDocument<Vec<PendingOrder>>,
}

impl PendingQueue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// Reads the whole queue; a missing file is an empty queue.
    pub async fn all(&self) -> Result<Vec<PendingOrder>, OshpazError> {
        Ok(self.doc.read().await?.unwrap_or_default())
    }

    /// Appends one entry.
    pub async fn push(&self, entry: PendingOrder) -> Result<(), OshpazError> {
        let mut entries = self.all().await?;
        entries.push(entry);
        self.doc.write(&entries).await
    }

    /// Replaces the queue contents.
    pub async fn replace(&self, entries: &[PendingOrder]) -> Result<(), OshpazError> {
        self.doc.write(&entries.to_vec()).await
    }
}
