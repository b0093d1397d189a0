// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resilient order submission for the Oshpaz storefront.
//!
//! Wraps the intake endpoint in a retry loop with a file-backed
//! pending-order queue, so an order survives an unreachable backend
//! and is redelivered by a later reconciliation pass.

pub mod queue;
pub mod submit;

pub use queue::{PendingOrder, PendingQueue};
pub use submit::{FallbackTransport, ReconcileReport, SubmitClient, SubmitOutcome};
