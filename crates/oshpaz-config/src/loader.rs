// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./oshpaz.toml` > `~/.config/oshpaz/oshpaz.toml`
//! > `/etc/oshpaz/oshpaz.toml` with environment variable overrides via
//! the `OSHPAZ_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::OshpazConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/oshpaz/oshpaz.toml` (system-wide)
/// 3. `~/.config/oshpaz/oshpaz.toml` (user XDG config)
/// 4. `./oshpaz.toml` (local directory)
/// 5. `OSHPAZ_*` environment variables
pub fn load_config() -> Result<OshpazConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OshpazConfig::default()))
        .merge(Toml::file("/etc/oshpaz/oshpaz.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("oshpaz/oshpaz.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("oshpaz.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<OshpazConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OshpazConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OshpazConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OshpazConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `OSHPAZ_TELEGRAM_BOT_TOKEN` must map
/// to `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("OSHPAZ_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("http_", "http.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("notifier_", "notifier.", 1);
        mapped.into()
    })
}
