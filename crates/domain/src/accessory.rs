//! Accessory records and per-accessory mutable state.

use serde::{Deserialize, Serialize};

use crate::device::DeviceDescriptor;
use crate::id::AccessoryUuid;

/// The registered, cacheable mirror of one television.
///
/// Created when a device first appears in the catalog, rehydrated from the
/// cache on restart with the bound descriptor refreshed to the latest
/// configuration, and destroyed when its serial number disappears from a
/// later catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryRecord {
    /// Stable identity, derived from the device serial number.
    pub uuid: AccessoryUuid,
    /// Name shown by the host framework; fixed at creation time.
    pub display_name: String,
    /// The currently bound device descriptor.
    pub device: DeviceDescriptor,
}

impl AccessoryRecord {
    /// Create a fresh record for a device appearing for the first time.
    #[must_use]
    pub fn new(uuid: AccessoryUuid, device: DeviceDescriptor) -> Self {
        Self {
            uuid,
            display_name: device.name.clone(),
            device,
        }
    }
}

/// Mutable characteristic state, owned exclusively by one accessory's
/// state machine.
///
/// `active` and `active_identifier` transition independently: an "off"
/// television still remembers its selected input. The values reflect the
/// last *confirmed* command, not necessarily the device's physical state —
/// there is no feedback channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryState {
    /// Whether the television was last confirmed powered on.
    pub active: bool,
    /// 1-based identifier of the last confirmed input source.
    pub active_identifier: u32,
}

impl Default for AccessoryState {
    fn default() -> Self {
        Self {
            active: false,
            active_identifier: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(serial: &str) -> DeviceDescriptor {
        serde_json::from_str(&format!(
            r#"{{"name": "Television 2", "serial_number": "{serial}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn should_take_display_name_from_the_descriptor() {
        let device = descriptor("TV1");
        let record = AccessoryRecord::new(AccessoryUuid::from_serial("TV1"), device);
        assert_eq!(record.display_name, "Television 2");
    }

    #[test]
    fn should_roundtrip_record_through_json() {
        let record = AccessoryRecord::new(AccessoryUuid::from_serial("TV1"), descriptor("TV1"));
        let json = serde_json::to_string(&record).unwrap();
        let parsed: AccessoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn should_start_inactive_on_the_first_input() {
        let state = AccessoryState::default();
        assert!(!state.active);
        assert_eq!(state.active_identifier, 1);
    }
}
