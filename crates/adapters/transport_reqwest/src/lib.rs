//! # tvbridge-adapter-transport-reqwest
//!
//! Outbound HTTP command transport built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `CommandTransport` port defined in
//!   `tvbridge-app::ports::transport`
//! - Turn a resolved `CommandRequest` into a real HTTP request
//! - Classify outcomes: 2xx → success, other statuses → `HttpError` with
//!   status and body, no response → `HttpError` without status
//! - Enforce the bounded per-request timeout
//!
//! ## Dependency rule
//! Depends on `tvbridge-app` (for the port trait) and `tvbridge-domain`
//! (for request and error types). The `app` and `domain` crates must never
//! reference this adapter.

mod client;
pub mod config;

pub use client::ReqwestTransport;
pub use config::TransportConfig;
