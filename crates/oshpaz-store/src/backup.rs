// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backup-before-write helpers shared by the order log and catalog documents.
//!
//! Every write is preceded by a timestamped copy of the previous file
//! contents; the backup copy is the only durability/rollback mechanism
//! for this store.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Builds the timestamped backup name for a file: `<file>.backup.<millis>`.
pub(crate) fn backup_name(path: &Path) -> PathBuf {
    let millis = chrono::Utc::now().timestamp_millis();
    PathBuf::from(format!("{}.backup.{millis}", path.display()))
}

/// Copies an existing file to its timestamped backup name.
///
/// Best-effort: a failed backup is logged but never blocks the write
/// that follows it.
pub(crate) async fn backup_existing(path: &Path) {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return;
    }
    let backup = backup_name(path);
    match tokio::fs::copy(path, &backup).await {
        Ok(_) => debug!(path = %path.display(), backup = %backup.display(), "backup created"),
        Err(e) => warn!(path = %path.display(), error = %e, "could not create backup"),
    }
}

/// Quarantines a file that failed to parse by copying it aside.
///
/// The original stays in place; the next successful write overwrites it.
pub(crate) async fn quarantine(path: &Path) {
    let backup = backup_name(path);
    match tokio::fs::copy(path, &backup).await {
        Ok(_) => warn!(
            path = %path.display(),
            backup = %backup.display(),
            "unreadable file quarantined"
        ),
        Err(e) => warn!(path = %path.display(), error = %e, "could not quarantine file"),
    }
}
