// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Oshpaz storefront.
//!
//! Provides the shared error type, domain types (orders, catalog
//! entries, chat notices), the outbound channel trait, and the pure
//! intake rules (validation and sanitization) used by the HTTP gateway
//! and the notification relays.

pub mod error;
pub mod sanitize;
pub mod traits;
pub mod types;
pub mod validate;

pub use error::OshpazError;
pub use traits::NotifyChannel;
pub use types::{
    HealthStatus, MessageId, Order, OrderDraft, OrderItem, OrderStatus, OutboundNotice,
};
