//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use tvbridge_app::ports::{AccessoryCache, CommandTransport};
use tvbridge_app::services::platform::PlatformService;

/// Application state shared across all axum handlers.
///
/// Generic over the transport and cache types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrapper is cloned.
///
/// The outer `RwLock` only guards the accessory *map* (reload swaps it);
/// individual commands lock the per-accessory handle, so commands against
/// different televisions never serialize on each other.
pub struct AppState<T, C> {
    /// The platform service owning the accessory handles.
    pub platform: Arc<RwLock<PlatformService<T, C>>>,
}

impl<T, C> Clone for AppState<T, C> {
    fn clone(&self) -> Self {
        Self {
            platform: Arc::clone(&self.platform),
        }
    }
}

impl<T, C> AppState<T, C>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    /// Create state from a wired platform service.
    pub fn new(platform: PlatformService<T, C>) -> Self {
        Self {
            platform: Arc::new(RwLock::new(platform)),
        }
    }

    /// Create state from a pre-wrapped platform, for hosts that also drive
    /// reloads outside the HTTP layer.
    pub fn from_shared(platform: Arc<RwLock<PlatformService<T, C>>>) -> Self {
        Self { platform }
    }
}
