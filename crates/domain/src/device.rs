//! Device descriptors — the externally-configured catalog of televisions.
//!
//! A catalog is an ordered sequence of [`DeviceDescriptor`]. It is supplied
//! by configuration, immutable for the duration of a reconciliation pass,
//! and carries no behaviour beyond iteration. Validity checks (presence of
//! a serial number) happen during reconciliation, not here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One externally-configured television and how to command it over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Human-readable name, used as the accessory display name.
    pub name: String,
    /// Identity key. Descriptors without one are skipped during
    /// reconciliation; two descriptors sharing one collapse into a single
    /// accessory (last wins).
    #[serde(default)]
    pub serial_number: Option<String>,
    /// Model reported for the accessory.
    #[serde(default = "default_model")]
    pub model: String,
    /// Manufacturer reported for the accessory.
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    /// Default HTTP verb for every command on this device.
    #[serde(default)]
    pub method: Option<String>,
    /// Device-wide default headers, merged under each command's own.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Power on/off command pair.
    #[serde(default)]
    pub power: PowerCommands,
    /// Selectable input sources, addressed by 1-based position.
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
}

fn default_model() -> String {
    "TV".to_string()
}

fn default_manufacturer() -> String {
    "Generic".to_string()
}

/// The power command pair plus the transport fields shared by both
/// transitions. `method`, `headers` and `body` apply to powering on and
/// off alike; only the URL differs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerCommands {
    /// Endpoint hit when turning the television on.
    pub on_url: Option<String>,
    /// Endpoint hit when turning the television off.
    pub off_url: Option<String>,
    /// Verb override for power commands.
    pub method: Option<String>,
    /// Headers merged over the device-wide defaults.
    pub headers: HashMap<String, String>,
    /// Request body sent with either transition.
    pub body: Option<String>,
}

/// One selectable input source on a television.
///
/// A source is identified at runtime by its 1-based position in the
/// device's `sources` sequence; the name is only for display. Name
/// uniqueness per device is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Display name of the input (e.g. `"HDMI1"`, `"Netflix"`).
    pub name: String,
    /// Input category code exposed to the host framework.
    #[serde(rename = "type", default)]
    pub source_type: SourceType,
    /// Endpoint hit when selecting this input.
    #[serde(default)]
    pub url: Option<String>,
    /// Verb override for this input.
    #[serde(default)]
    pub method: Option<String>,
    /// Headers merged over the device-wide defaults.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body sent when selecting this input.
    #[serde(default)]
    pub body: Option<String>,
}

/// Input source category, serialized as the host framework's integer code.
///
/// Unknown codes are rejected when the catalog is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SourceType {
    Other,
    HomeScreen,
    Tuner,
    #[default]
    Hdmi,
    CompositeVideo,
    SVideo,
    ComponentVideo,
    Dvi,
    Airplay,
    Usb,
    Application,
}

/// Raised when a catalog entry carries an input source type code outside
/// the known 0–10 range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input source type code {0}")]
pub struct UnknownSourceType(pub u8);

impl From<SourceType> for u8 {
    fn from(value: SourceType) -> Self {
        match value {
            SourceType::Other => 0,
            SourceType::HomeScreen => 1,
            SourceType::Tuner => 2,
            SourceType::Hdmi => 3,
            SourceType::CompositeVideo => 4,
            SourceType::SVideo => 5,
            SourceType::ComponentVideo => 6,
            SourceType::Dvi => 7,
            SourceType::Airplay => 8,
            SourceType::Usb => 9,
            SourceType::Application => 10,
        }
    }
}

impl TryFrom<u8> for SourceType {
    type Error = UnknownSourceType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Other),
            1 => Ok(Self::HomeScreen),
            2 => Ok(Self::Tuner),
            3 => Ok(Self::Hdmi),
            4 => Ok(Self::CompositeVideo),
            5 => Ok(Self::SVideo),
            6 => Ok(Self::ComponentVideo),
            7 => Ok(Self::Dvi),
            8 => Ok(Self::Airplay),
            9 => Ok(Self::Usb),
            10 => Ok(Self::Application),
            other => Err(UnknownSourceType(other)),
        }
    }
}
