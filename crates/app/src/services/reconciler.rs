//! Reconciler — diffs the device catalog against the cached accessory set.
//!
//! Runs once per lifecycle event (startup, explicit re-discovery), never
//! continuously. It decides, it does not apply: the three result sets are
//! handed to the cache collaborator by [`PlatformService`].
//!
//! [`PlatformService`]: crate::services::platform::PlatformService

use std::collections::HashMap;

use tvbridge_domain::accessory::AccessoryRecord;
use tvbridge_domain::device::DeviceDescriptor;
use tvbridge_domain::error::MissingIdentityError;
use tvbridge_domain::id::AccessoryUuid;

/// The three disjoint outcomes of one reconciliation pass, plus the
/// entries that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct ReconcilePlan {
    /// Catalog entries with no matching cached record.
    pub to_add: Vec<AccessoryRecord>,
    /// Cached records rebound to their refreshed descriptor.
    pub to_update: Vec<AccessoryRecord>,
    /// Cached records whose serial number left the catalog.
    pub to_remove: Vec<AccessoryRecord>,
    /// Catalog entries without a serial number; excluded from all three
    /// sets, never fatal to the pass.
    pub skipped: Vec<MissingIdentityError>,
}

/// Diff `catalog` against `cached`.
///
/// Every valid (serial-bearing) catalog entry lands in exactly one of
/// `to_add` or `to_update`; every cached record absent from the catalog
/// lands in `to_remove`. When two catalog entries share a serial number
/// the later one wins — a caller configuration error that is tolerated,
/// not validated.
#[must_use]
pub fn reconcile(catalog: &[DeviceDescriptor], cached: &[AccessoryRecord]) -> ReconcilePlan {
    let mut entries: Vec<(AccessoryUuid, DeviceDescriptor)> = Vec::new();
    let mut slots: HashMap<AccessoryUuid, usize> = HashMap::new();
    let mut skipped = Vec::new();

    for device in catalog {
        let serial = device.serial_number.as_deref().unwrap_or_default();
        if serial.is_empty() {
            tracing::warn!(device = %device.name, "skipping catalog entry without serial number");
            skipped.push(MissingIdentityError {
                name: device.name.clone(),
            });
            continue;
        }

        let uuid = AccessoryUuid::from_serial(serial);
        if let Some(slot) = slots.get(&uuid) {
            // Duplicate serial in one catalog load: later entry wins.
            entries[*slot].1 = device.clone();
        } else {
            slots.insert(uuid, entries.len());
            entries.push((uuid, device.clone()));
        }
    }

    let cached_by_uuid: HashMap<AccessoryUuid, &AccessoryRecord> =
        cached.iter().map(|record| (record.uuid, record)).collect();

    let mut to_add = Vec::new();
    let mut to_update = Vec::new();
    for (uuid, device) in entries {
        if let Some(existing) = cached_by_uuid.get(&uuid) {
            let mut record = (*existing).clone();
            record.device = device;
            to_update.push(record);
        } else {
            to_add.push(AccessoryRecord::new(uuid, device));
        }
    }

    let to_remove = cached
        .iter()
        .filter(|record| !slots.contains_key(&record.uuid))
        .cloned()
        .collect();

    ReconcilePlan {
        to_add,
        to_update,
        to_remove,
        skipped,
    }
}
