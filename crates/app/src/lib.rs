//! # tvbridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `CommandTransport` — execute one resolved HTTP command
//!   - `AccessoryCache` — load and maintain the registered accessory set
//! - Provide the **use-cases**:
//!   - `reconcile` — diff a device catalog against the cached accessories
//!   - `Television` — per-accessory state machine (get/set power and input)
//!   - `PlatformService` — one lifecycle pass wiring the two together
//!
//! ## Dependency rule
//! Depends on `tvbridge-domain` only (plus `tokio::sync` for the
//! per-accessory locks). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod ports;
pub mod services;
