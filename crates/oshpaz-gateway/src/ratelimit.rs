// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-client rate limiting for the API routes.
//!
//! Fixed-window counters keyed by client address, stored in a
//! [`DashMap`]. Expired windows are swept by a background task so the
//! map does not grow with every address ever seen.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use dashmap::DashMap;
use tracing::debug;

use crate::server::GatewayState;

struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window request counter per client key.
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
        }
    }

    /// Records one request for `key`. Returns `false` when the client
    /// has exhausted its window.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            reset_at: now + self.window,
        });
        if now > entry.reset_at {
            entry.count = 0;
            entry.reset_at = now + self.window;
        }
        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }

    /// Drops windows that have expired.
    pub fn sweep(&self) {
        let now = Instant::now();
        self.windows.retain(|_, w| now <= w.reset_at);
    }

    /// Spawns a task sweeping expired windows every five window lengths.
    pub fn spawn_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let limiter = self.clone();
        let period = limiter.window * 5;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                limiter.sweep();
            }
        })
    }
}

/// Derives the rate-limit key for a request.
///
/// Prefers the first `X-Forwarded-For` entry (the gateway runs behind
/// a proxy in production), then the peer address, then a shared
/// `"unknown"` bucket.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }
    match peer {
        Some(addr) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}

/// Middleware rejecting clients that exceed the request budget.
pub async fn rate_limit_middleware(
    State(state): State<GatewayState>,
    request: Request,
    next: Next,
) -> Response {
    // ConnectInfo is absent when the router is driven without a real
    // listener (tests); those requests share the "unknown" bucket.
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let key = client_key(request.headers(), peer);
    if !state.limiter.check(&key) {
        debug!(client = %key, "rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "success": false, "error": "Too many requests" })),
        )
            .into_response();
    }
    next.run(request).await
}
