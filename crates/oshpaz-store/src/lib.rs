// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat JSON-file persistence for the Oshpaz storefront.
//!
//! The order log here is the single source of truth shared by the HTTP
//! gateway process and the notifier process; catalog content lives in
//! sibling single-value documents. Durability comes from a timestamped
//! backup copy taken before every write.

mod backup;
pub mod document;
pub mod log;

pub use document::JsonDocument;
pub use log::OrderLog;
