//! # tvbridge-adapter-http-axum
//!
//! HTTP driving adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the accessory characteristic hooks as a **JSON REST API**:
//!   list accessories, fetch one, set power, set input source
//! - Map HTTP requests into `Television` get/set calls (driving adapter)
//! - Map application errors onto HTTP status codes (a device that rejects
//!   a command is a *gateway* problem, not a client one)
//!
//! ## Dependency rule
//! Depends on `tvbridge-app` (for port traits and services) and
//! `tvbridge-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
