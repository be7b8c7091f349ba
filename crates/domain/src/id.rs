//! Deterministic accessory identifier derived from a device serial number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier for an accessory, derived from its device's serial
/// number.
///
/// The same serial number always produces the same identifier, across
/// process restarts and machines. This is what lets a reconciliation pass
/// find previously-registered accessories instead of duplicating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessoryUuid(uuid::Uuid);

impl AccessoryUuid {
    /// Namespace for the v5 derivation. Fixed forever: changing it would
    /// orphan every cached accessory.
    const NAMESPACE: uuid::Uuid = uuid::Uuid::from_u128(0x4a6f_9a35_c9d4_4c57_8a5e_2f1d_03b7_66aa);

    /// Derive the identifier for the given serial number.
    #[must_use]
    pub fn from_serial(serial: &str) -> Self {
        Self(uuid::Uuid::new_v5(&Self::NAMESPACE, serial.as_bytes()))
    }

    /// Wrap an existing UUID (e.g. one parsed from a cache file).
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for AccessoryUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AccessoryUuid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
