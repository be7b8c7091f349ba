//! # tvbridge-adapter-cache-json
//!
//! Accessory cache adapter persisting the registered set to a single JSON
//! file.
//!
//! ## Responsibilities
//! - Implement the `AccessoryCache` port defined in
//!   `tvbridge-app::ports::cache`
//! - Keep the registered accessory records readable across restarts (this
//!   is what makes reconciliation an update instead of a re-registration)
//! - Treat a missing file as an empty cache; a corrupt file is an error
//!
//! ## Dependency rule
//! Depends on `tvbridge-app` (for the port trait) and `tvbridge-domain`
//! (for the record type). The `app` and `domain` crates must never
//! reference this adapter.

mod cache;
mod error;

pub use cache::JsonFileCache;
pub use error::CacheError;
