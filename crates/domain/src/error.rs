//! Error types shared across the workspace.
//!
//! Each layer raises the typed error that fits its boundary and converts
//! upward into [`BridgeError`] via `#[from]`. A failed command never
//! mutates accessory state, so every error here describes an attempt that
//! left the mirror exactly as it was.

/// Top-level error for accessory operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A requested transition has no usable command configuration.
    #[error("command configuration error")]
    Configuration(#[from] ConfigurationError),

    /// The device rejected the command or could not be reached.
    #[error("device command failed")]
    Http(#[from] HttpError),

    /// The addressed accessory does not exist.
    #[error("accessory not found")]
    NotFound(#[from] NotFoundError),

    /// The accessory cache collaborator failed.
    #[error("accessory cache error")]
    Cache(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BridgeError {
    /// Wrap a cache collaborator's error for propagation across the port
    /// boundary.
    #[must_use]
    pub fn cache(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Cache(Box::new(err))
    }
}

/// A state transition was requested that the device's configuration cannot
/// express. Surfaced to the caller of `set`; in-memory state is left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The power command pair lacks the URL for the requested transition.
    #[error("television {device:?} has no URL for powering {}", if *.power_on { "on" } else { "off" })]
    MissingPowerUrl {
        /// Device name, for diagnostics.
        device: String,
        /// The transition that was requested.
        power_on: bool,
    },

    /// The requested 1-based source identifier is outside the configured
    /// source list.
    #[error("television {device:?} has no input source with identifier {identifier} ({configured} configured)")]
    UnknownSourceIdentifier {
        /// Device name, for diagnostics.
        device: String,
        /// The identifier that was requested.
        identifier: u32,
        /// How many sources the device actually configures.
        configured: usize,
    },

    /// The matching source exists but configures no URL.
    #[error("input source {source_name:?} on television {device:?} has no URL")]
    MissingSourceUrl {
        /// Device name, for diagnostics.
        device: String,
        /// Source name, for diagnostics.
        source_name: String,
    },
}

/// A command was executed but did not succeed: either the device answered
/// with a non-2xx status, or no response arrived at all. No retries are
/// attempted anywhere; a single failed attempt surfaces as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// The device answered with a non-2xx status.
    #[error("device answered HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, kept for diagnostics.
        body: String,
    },

    /// The request never produced a response (connection failure, timeout,
    /// malformed request).
    #[error("request failed without a response: {message}")]
    Transport {
        /// Transport-level failure description.
        message: String,
    },
}

impl HttpError {
    /// The HTTP status code, when a response arrived at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

/// A catalog entry has no serial number and therefore no identity.
///
/// Never fatal: the reconciler logs it, excludes the entry from the pass,
/// and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device {name:?} has no serial number")]
pub struct MissingIdentityError {
    /// Name of the skipped catalog entry.
    pub name: String,
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// What kind of thing was looked up.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}
