// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API gateway for the Oshpaz storefront.
//!
//! Serves the mini app's REST API: order intake, catalog documents,
//! and the admin panel's order management. Persists everything through
//! the shared JSON files that the notifier process watches; the two
//! processes never talk directly.

pub mod auth;
pub mod handlers;
pub mod ratelimit;
pub mod server;

pub use auth::AdminList;
pub use ratelimit::RateLimiter;
pub use server::{GatewayState, ServerConfig, build_router, start_server};
