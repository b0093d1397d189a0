// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic single-value JSON documents (products, banners, hero block).
//!
//! Same file semantics as the order log: backup before every write,
//! quarantine on parse failure, missing file reads as absent.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use oshpaz_core::OshpazError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::backup::{backup_existing, quarantine};

/// A file holding one JSON-serialized value.
#[derive(Debug, Clone)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens a document at the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, or `None` when the file is missing, empty,
    /// or unreadable (unreadable files are quarantined).
    pub async fn read(&self) -> Result<Option<T>, OshpazError> {
        if !tokio::fs::try_exists(&self.path)
            .await
            .map_err(OshpazError::storage)?
        {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(OshpazError::storage)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "document failed to parse");
                quarantine(&self.path).await;
                Ok(None)
            }
        }
    }

    /// Overwrites the document, backing up the previous contents first.
    pub async fn write(&self, value: &T) -> Result<(), OshpazError> {
        backup_existing(&self.path).await;
        let json = serde_json::to_string_pretty(value).map_err(OshpazError::storage)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(OshpazError::storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oshpaz_core::types::Product;

    #[tokio::test]
    async fn round_trips_a_product_list() {
        let dir = tempfile::tempdir().unwrap();
        let doc: JsonDocument<Vec<Product>> = JsonDocument::new(dir.path().join("products.json"));

        assert!(doc.read().await.unwrap().is_none());

        let products = vec![Product {
            id: "p1".into(),
            name: "Un".into(),
            price: 12000.0,
            description: String::new(),
            category: "asosiy".into(),
            rest: serde_json::Map::new(),
        }];
        doc.write(&products).await.unwrap();

        let read = doc.read().await.unwrap().unwrap();
        assert_eq!(read, products);
    }

    #[tokio::test]
    async fn corrupt_document_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        std::fs::write(&path, "][").unwrap();
        let doc: JsonDocument<oshpaz_core::types::Hero> = JsonDocument::new(&path);
        assert!(doc.read().await.unwrap().is_none());
    }
}
