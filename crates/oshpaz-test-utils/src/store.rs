// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temp-directory store helpers and order fixtures.

use chrono::{DateTime, Utc};
use oshpaz_core::{Order, OrderDraft, OrderItem};
use oshpaz_store::OrderLog;
use tempfile::TempDir;

/// Creates an order log backed by a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the duration of the test.
pub fn temp_order_log() -> (TempDir, OrderLog) {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = OrderLog::new(dir.path().join("orders.json"));
    (dir, log)
}

/// A minimal valid order draft (one pizza-dough line, consistent total).
pub fn sample_draft() -> OrderDraft {
    OrderDraft {
        name: "Ali".into(),
        phone: "+998901234567".into(),
        address: "Chilonzor, 10-uy, 5-xonadon".into(),
        delivery_time: "asap".into(),
        comment: String::new(),
        items: vec![OrderItem {
            name: "Pitsa xamiri".into(),
            price: 25000.0,
            quantity: 2,
        }],
        total: 50000.0,
        telegram_user_id: Some("424242".into()),
    }
}

/// A fresh order created from [`sample_draft`] at the given time.
pub fn sample_order(id: &str, created_at: DateTime<Utc>) -> Order {
    Order::from_draft(id, sample_draft(), created_at)
}
