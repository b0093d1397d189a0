// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Oshpaz storefront services.

use thiserror::Error;

/// The primary error type used across the storefront crates.
#[derive(Debug, Error)]
pub enum OshpazError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed client input, rejected before it reaches storage.
    #[error("invalid order data: {0}")]
    Validation(String),

    /// A non-admin user attempted a privileged operation.
    #[error("access denied")]
    AccessDenied,

    /// No order exists with the given identifier.
    #[error("order not found: {0}")]
    NotFound(String),

    /// Persistence errors (file read/write failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Chat channel errors (connection failure, send failure, bad recipient).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OshpazError {
    /// Wraps any error as a `Storage` variant.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }

    /// Builds a `Channel` variant from a message and an underlying error.
    pub fn channel<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Channel {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
