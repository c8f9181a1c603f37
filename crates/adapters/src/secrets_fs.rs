//! File-backed credential store
//!
//! Reads secrets from a TOML file shaped as one table per logical key:
//!
//! ```toml
//! [twitter]
//! bearer = "AAAA..."
//! ```

use async_trait::async_trait;
use requote_domain::{CredentialError, CredentialStore};
use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Credential store backed by a TOML secrets file.
///
/// The file is re-read on every lookup; nothing is cached across
/// invocations, so a rotated token is picked up by the next run.
pub struct FileCredentialStore {
    path: PathBuf,
}

#[derive(Deserialize)]
struct SecretEntry {
    bearer: String,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn bearer_token(&self, key: &str) -> Result<SecretString, CredentialError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CredentialError::Unavailable(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let entries: HashMap<String, SecretEntry> = toml::from_str(&raw)
            .map_err(|e| CredentialError::Unavailable(format!("invalid secrets file: {}", e)))?;

        let entry = entries
            .get(key)
            .ok_or_else(|| CredentialError::NotFound(key.to_string()))?;

        if entry.bearer.trim().is_empty() {
            return Err(CredentialError::NotFound(key.to_string()));
        }

        Ok(SecretString::new(entry.bearer.clone().into()))
    }
}
