//! # registry-auth
//!
//! Authentication for the package registry.
//!
//! Registers users (storing only Argon2id hashes), logs them in against the
//! record store and issues bearer tokens, and verifies those tokens without
//! touching storage.

#![warn(clippy::all)]

pub mod errors;
pub mod service;
pub mod traits;

pub use errors::{AuthError, Result};
pub use registry_tokens::Claims;
pub use service::StoreAuthService;
pub use traits::Authenticator;
