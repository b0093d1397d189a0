// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared persisted order log.
//!
//! One JSON array of orders in a single file, shared between the HTTP
//! process and the notifier process. Every logical write is
//! read-full-log, mutate-in-memory, write-full-log with a timestamped
//! backup taken first. There is no locking: the two processes race at
//! file granularity and the last writer wins, which is acceptable only
//! at low write concurrency (the relays and the gateway touch disjoint
//! fields, so their window of conflict is small but real).

use std::path::{Path, PathBuf};

use oshpaz_core::{Order, OshpazError};
use tracing::{debug, warn};

use crate::backup::{backup_existing, quarantine};

/// File-backed append/update-in-place store of [`Order`] records.
#[derive(Debug, Clone)]
pub struct OrderLog {
    path: PathBuf,
}

impl OrderLog {
    /// Opens an order log at the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full log.
    ///
    /// A missing or empty file reads as an empty log. A file that fails
    /// to parse is quarantined to a timestamped backup name and also
    /// reads as empty, so a corrupt log never takes the service down.
    pub async fn read_all(&self) -> Result<Vec<Order>, OshpazError> {
        if !tokio::fs::try_exists(&self.path)
            .await
            .map_err(OshpazError::storage)?
        {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(OshpazError::storage)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&content) {
            Ok(orders) => Ok(orders),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "order log failed to parse");
                quarantine(&self.path).await;
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the full log, backing up the previous contents first.
    pub async fn write_all(&self, orders: &[Order]) -> Result<(), OshpazError> {
        backup_existing(&self.path).await;
        let json = serde_json::to_string_pretty(orders).map_err(OshpazError::storage)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(OshpazError::storage)?;
        debug!(path = %self.path.display(), count = orders.len(), "order log written");
        Ok(())
    }

    /// Appends one order to the log.
    pub async fn append(&self, order: Order) -> Result<(), OshpazError> {
        let mut orders = self.read_all().await?;
        orders.push(order);
        self.write_all(&orders).await
    }

    /// Looks up an order by id.
    pub async fn find(&self, id: &str) -> Result<Option<Order>, OshpazError> {
        Ok(self.read_all().await?.into_iter().find(|o| o.id == id))
    }

    /// Read-modify-write of a single order by id.
    ///
    /// Returns the updated order, or `None` when no order has the id.
    /// The read and the write are not atomic with respect to other
    /// processes; see the module docs.
    pub async fn update<F>(&self, id: &str, apply: F) -> Result<Option<Order>, OshpazError>
    where
        F: FnOnce(&mut Order),
    {
        let mut orders = self.read_all().await?;
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        apply(order);
        let updated = order.clone();
        self.write_all(&orders).await?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use oshpaz_core::{OrderDraft, OrderItem, OrderStatus};

    fn sample_order(id: &str) -> Order {
        Order::from_draft(
            id,
            OrderDraft {
                name: "Ali".into(),
                phone: "+998901234567".into(),
                address: "Chilonzor, 10-uy".into(),
                delivery_time: "asap".into(),
                comment: String::new(),
                items: vec![OrderItem {
                    name: "Pitsa xamiri".into(),
                    price: 25000.0,
                    quantity: 2,
                }],
                total: 50000.0,
                telegram_user_id: Some("42".into()),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.json"));
        assert!(log.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_find() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.json"));
        log.append(sample_order("a1")).await.unwrap();
        log.append(sample_order("a2")).await.unwrap();

        let all = log.read_all().await.unwrap();
        assert_eq!(all.len(), 2);
        let found = log.find("a2").await.unwrap().unwrap();
        assert_eq!(found.items[0].quantity, 2);
        assert!(log.find("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_flips_flag_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.json"));
        log.append(sample_order("a1")).await.unwrap();

        let updated = log
            .update("a1", |o| o.notified_to_admin = true)
            .await
            .unwrap()
            .unwrap();
        assert!(updated.notified_to_admin);
        assert!(log.find("a1").await.unwrap().unwrap().notified_to_admin);

        assert!(log.update("missing", |_| {}).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_changes_status_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.json"));
        log.append(sample_order("a1")).await.unwrap();

        let now = Utc::now();
        let updated = log
            .update("a1", |o| {
                o.status = OrderStatus::Preparing;
                o.updated_at = Some(now);
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Preparing);
        assert!(updated.updated_at.unwrap() > updated.created_at);
    }

    #[tokio::test]
    async fn write_creates_backup_of_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.json"));
        log.append(sample_order("a1")).await.unwrap();
        log.append(sample_order("a2")).await.unwrap();

        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .contains("orders.json.backup.")
            })
            .collect();
        assert!(!backups.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_quarantined_and_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let log = OrderLog::new(&path);
        assert!(log.read_all().await.unwrap().is_empty());

        let quarantined = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .any(|e| {
                e.file_name()
                    .to_string_lossy()
                    .contains("orders.json.backup.")
            });
        assert!(quarantined);
    }

    #[tokio::test]
    async fn empty_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "  \n").unwrap();
        let log = OrderLog::new(&path);
        assert!(log.read_all().await.unwrap().is_empty());
    }
}
