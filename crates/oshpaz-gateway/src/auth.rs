// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin authorization for the gateway.
//!
//! The admin panel identifies its user by Telegram user id; the
//! gateway checks that id against the configured admin list. An empty
//! list allows everyone, which keeps a fresh deployment usable before
//! any admin is configured, but is loudly warned about.

use std::sync::Arc;

use tracing::warn;

/// The set of Telegram user ids with admin rights.
#[derive(Debug, Clone)]
pub struct AdminList {
    ids: Arc<Vec<String>>,
}

impl AdminList {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids: Arc::new(ids) }
    }

    /// Whether the list is configured at all.
    pub fn is_configured(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Checks whether the given user id holds admin rights.
    ///
    /// An unconfigured list admits everyone (with a warning).
    pub fn is_admin(&self, user_id: &str) -> bool {
        if self.ids.is_empty() {
            warn!("no admin ids configured, allowing all users");
            return true;
        }
        self.ids.iter().any(|id| id == user_id)
    }
}
