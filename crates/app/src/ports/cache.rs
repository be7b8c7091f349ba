//! Cache port — persistence collaborator for registered accessories.

use std::future::Future;

use tvbridge_domain::accessory::AccessoryRecord;
use tvbridge_domain::error::BridgeError;

/// The host-side store of registered accessories.
///
/// The reconciler computes *what* to add, update and remove; this port is
/// *how* those decisions are applied. Persistence mechanics (file, database,
/// host framework) are entirely the adapter's concern.
pub trait AccessoryCache: Send + Sync {
    /// Yield the accessory set registered by previous runs.
    fn load(&self) -> impl Future<Output = Result<Vec<AccessoryRecord>, BridgeError>> + Send;

    /// Register accessories appearing for the first time.
    fn register(
        &self,
        records: &[AccessoryRecord],
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Refresh the bound descriptor of already-registered accessories.
    fn update_context(
        &self,
        records: &[AccessoryRecord],
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Drop accessories whose devices left the catalog.
    fn unregister(
        &self,
        records: &[AccessoryRecord],
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}
