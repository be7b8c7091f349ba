//! Cache adapter error types.

use tvbridge_domain::error::BridgeError;

/// Errors specific to the JSON file cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Reading or writing the cache file failed.
    #[error("failed to read or write the accessory cache file")]
    Io(#[from] std::io::Error),

    /// The cache file exists but does not contain a valid record set.
    #[error("accessory cache file is corrupt")]
    Corrupt(#[from] serde_json::Error),
}

impl From<CacheError> for BridgeError {
    fn from(err: CacheError) -> Self {
        BridgeError::cache(err)
    }
}
