//! Integration tests for the Elanicia storefront API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API (with or without a local MongoDB)
//! cargo run -p elanicia-api
//!
//! # Run the ignored end-to-end tests against it
//! cargo test -p elanicia-integration-tests -- --ignored
//! ```
//!
//! The tests hit a live server over HTTP and are `#[ignore]`d by default
//! so `cargo test` stays hermetic. Point them at a non-default server
//! with `ELANICIA_API_BASE_URL`.
//!
//! Backend-dependent assertions (e.g. order ids, which only the document
//! store assigns) read `GET /api/health` first and adapt to whichever
//! backend the server selected at startup.
