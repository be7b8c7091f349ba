//! Television — the per-accessory state machine.
//!
//! One instance exists per registered accessory and exclusively owns that
//! accessory's mutable state. Reads are IO-free; writes resolve a command,
//! execute it through the transport port, and commit the new value only
//! after the device confirmed success. A failed command leaves the mirror
//! exactly as it was.

use tvbridge_domain::accessory::{AccessoryRecord, AccessoryState};
use tvbridge_domain::error::BridgeError;
use tvbridge_domain::id::AccessoryUuid;

use crate::ports::CommandTransport;

/// State machine for one mirrored television.
pub struct Television<T> {
    record: AccessoryRecord,
    transport: T,
    state: AccessoryState,
}

impl<T: CommandTransport> Television<T> {
    /// Bind a state machine to a registered accessory record.
    pub fn new(record: AccessoryRecord, transport: T) -> Self {
        Self {
            record,
            transport,
            state: AccessoryState::default(),
        }
    }

    /// The bound accessory record.
    #[must_use]
    pub fn record(&self) -> &AccessoryRecord {
        &self.record
    }

    /// Stable accessory identity.
    #[must_use]
    pub fn uuid(&self) -> AccessoryUuid {
        self.record.uuid
    }

    /// Last confirmed power state.
    #[must_use]
    pub fn active(&self) -> bool {
        self.state.active
    }

    /// Last confirmed input source identifier (1-based).
    #[must_use]
    pub fn active_identifier(&self) -> u32 {
        self.state.active_identifier
    }

    /// Replace the bound record after a reconciliation pass refreshed the
    /// descriptor. In-memory state is kept: a configuration change does not
    /// imply the physical device changed state.
    pub fn rebind(&mut self, record: AccessoryRecord) {
        self.record = record;
    }

    /// Power the television on or off.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Configuration`] when the descriptor has no
    /// URL for the requested transition, or [`BridgeError::Http`] when the
    /// device rejected the command or could not be reached. Either way the
    /// in-memory state is unchanged.
    #[tracing::instrument(skip(self), fields(accessory = %self.record.display_name))]
    pub async fn set_active(&mut self, value: bool) -> Result<(), BridgeError> {
        let request = self.record.device.power_request(value)?;
        self.transport.execute(&request).await.inspect_err(|err| {
            tracing::error!(error = %err, "power command failed");
        })?;
        self.state.active = value;
        tracing::debug!(active = value, "power state confirmed");
        Ok(())
    }

    /// Select the input source with the given 1-based identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Configuration`] when the identifier is out of
    /// range or the source has no URL, or [`BridgeError::Http`] when the
    /// device rejected the command or could not be reached. Either way the
    /// in-memory state is unchanged.
    #[tracing::instrument(skip(self), fields(accessory = %self.record.display_name))]
    pub async fn set_active_identifier(&mut self, value: u32) -> Result<(), BridgeError> {
        let request = self.record.device.source_request(value)?;
        self.transport.execute(&request).await.inspect_err(|err| {
            tracing::error!(error = %err, "input change failed");
        })?;
        self.state.active_identifier = value;
        tracing::debug!(active_identifier = value, "input source confirmed");
        Ok(())
    }
}
