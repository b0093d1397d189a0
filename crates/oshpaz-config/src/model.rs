// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Oshpaz storefront services.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup with actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Oshpaz configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to
/// sensible values; only `telegram.bot_token` is required, and only by
/// the notifier process.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OshpazConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Telegram bot settings (notifier process).
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// File-store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Notification relay settings.
    #[serde(default)]
    pub notifier: NotifierConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "oshpaz".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum API requests per client per window.
    #[serde(default = "default_rate_limit_max_requests")]
    pub rate_limit_max_requests: u32,

    /// Rate-limit window length in seconds.
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rate_limit_max_requests: default_rate_limit_max_requests(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_rate_limit_max_requests() -> u32 {
    100
}

fn default_rate_limit_window_secs() -> u64 {
    60
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather. Required by the notifier process.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Admin chat ids. The first entry receives order announcements;
    /// all entries pass the admin allowlist check. An empty list allows
    /// every user (open mode, logged loudly at startup).
    #[serde(default)]
    pub admin_chat_ids: Vec<String>,
}

/// File-store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding orders.json and the catalog documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    ".".to_string()
}

impl StorageConfig {
    /// Path of the shared order log.
    pub fn orders_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("orders.json")
    }

    /// Path of the product catalog document.
    pub fn products_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("products.json")
    }

    /// Path of the banners document.
    pub fn banners_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("banners.json")
    }

    /// Path of the hero block document.
    pub fn hero_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("hero.json")
    }
}

/// Notification relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotifierConfig {
    /// Seconds between relay scans of the order log.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Recency window in seconds: orders created/updated longer ago
    /// than this are never announced (prevents re-announcing historical
    /// backlog after a relay restart).
    #[serde(default = "default_recency_window_secs")]
    pub recency_window_secs: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            recency_window_secs: default_recency_window_secs(),
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_recency_window_secs() -> u64 {
    60
}
