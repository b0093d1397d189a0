// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification relays for the Oshpaz storefront.
//!
//! Two independent polling loops run in the notifier process: the
//! admin relay announces newly received orders to the admin chat, and
//! the status relay tells customers when the admin moves their order
//! forward. Both coordinate with the HTTP process only through the
//! shared order log; there is no direct channel between the processes.

pub mod admin;
pub mod message;
pub mod status;

pub use admin::AdminRelay;
pub use status::StatusRelay;
