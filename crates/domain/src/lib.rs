//! # tvbridge-domain
//!
//! Pure domain model for the tvbridge accessory bridge.
//!
//! ## Responsibilities
//! - Foundational types: the deterministic accessory identifier and the
//!   error conventions shared across the workspace
//! - Define **device descriptors** (the externally-configured catalog of
//!   HTTP-controllable televisions and their input sources)
//! - Define **accessory records** (the cached, registered mirror of a
//!   device) and the per-accessory mutable state
//! - Resolve device + command configuration into a concrete HTTP
//!   **command request** (pure merging, no IO)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod accessory;
pub mod command;
pub mod device;
pub mod error;
pub mod id;
