//! Platform service — one lifecycle pass over catalog, cache and handles.
//!
//! The host decides *when* a pass runs (startup, explicit re-discovery);
//! this service owns *what happens*: load the cached accessory set, diff it
//! against the catalog, apply the plan through the cache port, and keep one
//! [`Television`] handle per surviving accessory.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use tvbridge_domain::device::DeviceDescriptor;
use tvbridge_domain::error::BridgeError;
use tvbridge_domain::id::AccessoryUuid;

use crate::ports::{AccessoryCache, CommandTransport};
use crate::services::reconciler::reconcile;
use crate::services::television::Television;

/// A shareable, individually-locked accessory handle.
///
/// The per-handle mutex serializes commands against one television while
/// leaving different televisions fully concurrent.
pub type TelevisionHandle<T> = Arc<Mutex<Television<T>>>;

/// Counts reported by one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadSummary {
    /// Accessories registered for the first time.
    pub added: usize,
    /// Accessories rebound to a refreshed descriptor.
    pub updated: usize,
    /// Accessories dropped because their device left the catalog.
    pub removed: usize,
    /// Catalog entries skipped for lacking a serial number.
    pub skipped: usize,
}

/// Orchestrates reconciliation and owns the accessory handles.
pub struct PlatformService<T, C> {
    transport: T,
    cache: C,
    accessories: HashMap<AccessoryUuid, TelevisionHandle<T>>,
}

impl<T, C> PlatformService<T, C>
where
    T: CommandTransport + Clone,
    C: AccessoryCache,
{
    /// Create a platform with no accessories yet; call
    /// [`reload`](Self::reload) to populate it.
    pub fn new(transport: T, cache: C) -> Self {
        Self {
            transport,
            cache,
            accessories: HashMap::new(),
        }
    }

    /// Run one reconciliation pass over `catalog`.
    ///
    /// Surviving accessories keep their handle (and with it the in-memory
    /// state) and are rebound to the refreshed descriptor; new ones get a
    /// fresh handle; removed ones are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Cache`] when the cache collaborator fails to
    /// load or apply the plan.
    #[tracing::instrument(skip(self, catalog), fields(devices = catalog.len()))]
    pub async fn reload(&mut self, catalog: &[DeviceDescriptor]) -> Result<ReloadSummary, BridgeError> {
        let cached = self.cache.load().await?;
        let plan = reconcile(catalog, &cached);

        self.cache.register(&plan.to_add).await?;
        self.cache.update_context(&plan.to_update).await?;
        self.cache.unregister(&plan.to_remove).await?;

        let summary = ReloadSummary {
            added: plan.to_add.len(),
            updated: plan.to_update.len(),
            removed: plan.to_remove.len(),
            skipped: plan.skipped.len(),
        };

        let mut next = HashMap::with_capacity(summary.added + summary.updated);
        for record in plan.to_add.into_iter().chain(plan.to_update) {
            let uuid = record.uuid;
            if let Some(handle) = self.accessories.remove(&uuid) {
                handle.lock().await.rebind(record);
                next.insert(uuid, handle);
            } else {
                let television = Television::new(record, self.transport.clone());
                next.insert(uuid, Arc::new(Mutex::new(television)));
            }
        }
        self.accessories = next;

        tracing::info!(
            added = summary.added,
            updated = summary.updated,
            removed = summary.removed,
            skipped = summary.skipped,
            "device catalog reconciled"
        );
        Ok(summary)
    }

    /// Look up the handle for one accessory.
    #[must_use]
    pub fn accessory(&self, uuid: AccessoryUuid) -> Option<TelevisionHandle<T>> {
        self.accessories.get(&uuid).cloned()
    }

    /// All current handles, in no particular order.
    #[must_use]
    pub fn accessories(&self) -> Vec<TelevisionHandle<T>> {
        self.accessories.values().cloned().collect()
    }

    /// Number of registered accessories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accessories.len()
    }

    /// Whether no accessory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessories.is_empty()
    }
}
