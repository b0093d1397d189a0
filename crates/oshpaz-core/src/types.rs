// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the storefront crates.
//!
//! Field names serialize in camelCase to match the persisted order log
//! and the HTTP wire format consumed by the mini app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a delivered chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Health status reported by channel health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Channel is fully operational.
    Healthy,
    /// Channel is operational but experiencing issues.
    Degraded(String),
    /// Channel is not operational.
    Unhealthy(String),
}

/// Lifecycle status of an order.
///
/// `new` is the intake value; every other status is set by the admin
/// through the status update endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Confirmed,
    Preparing,
    Delivering,
    Completed,
    Cancelled,
}

/// A single line item in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderItem {
    /// Line total for this item.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// An untrusted order payload as submitted by the mini app.
///
/// This is the shape the intake validator and sanitizer operate on;
/// it becomes an [`Order`] only after both have run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default = "default_delivery_time")]
    pub delivery_time: String,
    #[serde(default)]
    pub comment: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub telegram_user_id: Option<String>,
}

fn default_delivery_time() -> String {
    "asap".to_string()
}

/// A persisted order record in the shared order log.
///
/// The log is the only authority for the notification flags: the admin
/// relay flips `notified_to_admin`, the status relay flips
/// `status_notified`, and neither relay announces the same
/// (order, flag) pair twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub delivery_time: String,
    #[serde(default)]
    pub comment: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub telegram_user_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notified_to_admin: bool,
    #[serde(default)]
    pub status_notified: bool,
}

impl Order {
    /// Builds a fresh order from a validated, sanitized draft.
    ///
    /// Status starts at `new` with both notification flags cleared.
    pub fn from_draft(id: impl Into<String>, draft: OrderDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            phone: draft.phone,
            address: draft.address,
            delivery_time: draft.delivery_time,
            comment: draft.comment,
            items: draft.items,
            total: draft.total,
            telegram_user_id: draft.telegram_user_id,
            status: OrderStatus::New,
            created_at: now,
            updated_at: None,
            notified_to_admin: false,
            status_notified: false,
        }
    }
}

/// A catalog product entry.
///
/// Unknown fields (emoji, image, unit, ...) are carried through
/// untouched so the admin panel round-trips whatever it stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// A promotional banner shown on the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Hero block content for the storefront landing view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// An outbound chat notification.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundNotice {
    /// Chat identifier of the recipient (admin chat or customer).
    pub recipient: String,
    /// Plain-text message body.
    pub text: String,
}
