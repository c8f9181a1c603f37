//! requote adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `secrets`: File- and environment-backed credential stores
//! - `comment`: Canned comment generator
//! - `x_api`: X (Twitter) API adapters

mod secrets_env;
mod secrets_fs;

pub mod comment;
pub mod x_api;

/// Re-exports for credential store adapters
pub mod secrets {
    pub use crate::secrets_env::EnvCredentialStore;
    pub use crate::secrets_fs::FileCredentialStore;
}

/// Re-exports for X API adapters
pub mod x {
    pub use crate::x_api::{
        StubCredentialStore, StubPostSource, StubQuotePublisher, XPostSource, XQuotePublisher,
    };
}
