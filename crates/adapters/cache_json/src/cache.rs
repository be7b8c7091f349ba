//! The JSON-file-backed `AccessoryCache` implementation.

use std::path::PathBuf;

use tvbridge_app::ports::AccessoryCache;
use tvbridge_domain::accessory::AccessoryRecord;
use tvbridge_domain::error::BridgeError;

use crate::error::CacheError;

/// Persists the registered accessory set as a JSON array in one file.
///
/// Every mutation rewrites the whole file; the set is small (one entry per
/// configured television).
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    /// Bind the cache to a file path. The file does not need to exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<Vec<AccessoryRecord>, CacheError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_all(&self, records: &[AccessoryRecord]) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

impl AccessoryCache for JsonFileCache {
    async fn load(&self) -> Result<Vec<AccessoryRecord>, BridgeError> {
        let records = self.read_all().await?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded accessory cache");
        Ok(records)
    }

    async fn register(&self, records: &[AccessoryRecord]) -> Result<(), BridgeError> {
        if records.is_empty() {
            return Ok(());
        }
        let mut all = self.read_all().await?;
        for record in records {
            match all.iter_mut().find(|r| r.uuid == record.uuid) {
                Some(slot) => *slot = record.clone(),
                None => all.push(record.clone()),
            }
        }
        self.write_all(&all).await?;
        Ok(())
    }

    async fn update_context(&self, records: &[AccessoryRecord]) -> Result<(), BridgeError> {
        if records.is_empty() {
            return Ok(());
        }
        let mut all = self.read_all().await?;
        for record in records {
            match all.iter_mut().find(|r| r.uuid == record.uuid) {
                Some(slot) => *slot = record.clone(),
                None => {
                    tracing::warn!(uuid = %record.uuid, "update for an accessory the cache does not hold");
                }
            }
        }
        self.write_all(&all).await?;
        Ok(())
    }

    async fn unregister(&self, records: &[AccessoryRecord]) -> Result<(), BridgeError> {
        if records.is_empty() {
            return Ok(());
        }
        let mut all = self.read_all().await?;
        all.retain(|r| !records.iter().any(|removed| removed.uuid == r.uuid));
        self.write_all(&all).await?;
        Ok(())
    }
}
