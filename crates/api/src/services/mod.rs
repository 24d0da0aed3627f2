//! Business services orchestrating storage and password hashing.

pub mod auth;

pub use auth::{AuthError, AuthService, Hasher};
