//! Elanicia Core - Shared types library.
//!
//! This crate provides common types used across the Elanicia components:
//! - `api` - Storefront HTTP API server
//! - `integration-tests` - End-to-end test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Record ids, normalized email addresses, and order status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
