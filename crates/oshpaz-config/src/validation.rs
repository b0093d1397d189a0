// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and non-zero intervals.

use crate::diagnostic::ConfigError;
use crate::model::OshpazConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &OshpazConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.http.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "http.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("http.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.data_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.data_dir must not be empty".to_string(),
        });
    }

    if config.http.rate_limit_max_requests == 0 {
        errors.push(ConfigError::Validation {
            message: "http.rate_limit_max_requests must be at least 1".to_string(),
        });
    }

    if config.http.rate_limit_window_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "http.rate_limit_window_secs must be at least 1".to_string(),
        });
    }

    if config.notifier.poll_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "notifier.poll_interval_secs must be at least 1".to_string(),
        });
    }

    if config.notifier.recency_window_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "notifier.recency_window_secs must be at least 1".to_string(),
        });
    }

    if let Some(token) = &config.telegram.bot_token
        && token.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "telegram.bot_token must not be empty when set".to_string(),
        });
    }

    for id in &config.telegram.admin_chat_ids {
        if id.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "telegram.admin_chat_ids must not contain empty entries".to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OshpazConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&OshpazConfig::default()).is_ok());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let mut config = OshpazConfig::default();
        config.notifier.poll_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().contains("poll_interval_secs"))
        );
    }

    #[test]
    fn bad_host_is_rejected() {
        let mut config = OshpazConfig::default();
        config.http.host = "not a host!".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_admin_id_is_rejected() {
        let mut config = OshpazConfig::default();
        config.telegram.admin_chat_ids = vec!["123".into(), " ".into()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = OshpazConfig::default();
        config.http.host = String::new();
        config.storage.data_dir = String::new();
        config.notifier.poll_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
