//! Environment-variable-backed credential store

use async_trait::async_trait;
use requote_domain::{CredentialError, CredentialStore};
use secrecy::SecretString;
use std::collections::HashMap;

/// Credential store that maps logical keys to environment variable names.
pub struct EnvCredentialStore {
    vars_by_key: HashMap<String, String>,
}

impl EnvCredentialStore {
    pub fn new() -> Self {
        Self {
            vars_by_key: HashMap::new(),
        }
    }

    /// Map a logical key to the environment variable holding its token
    pub fn with_mapping(mut self, key: impl Into<String>, env_var: impl Into<String>) -> Self {
        self.vars_by_key.insert(key.into(), env_var.into());
        self
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn bearer_token(&self, key: &str) -> Result<SecretString, CredentialError> {
        let env_var = self
            .vars_by_key
            .get(key)
            .ok_or_else(|| CredentialError::NotFound(key.to_string()))?;

        match std::env::var(env_var) {
            Ok(value) if !value.trim().is_empty() => Ok(SecretString::new(value.into())),
            _ => Err(CredentialError::NotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    // Each test uses a distinct env var so tests can run in parallel

    #[tokio::test]
    async fn test_reads_token_from_mapped_var() {
        unsafe { std::env::set_var("REQUOTE_TEST_TOKEN_A", "env-token") };
        let store = EnvCredentialStore::new().with_mapping("twitter", "REQUOTE_TEST_TOKEN_A");

        let token = store.bearer_token("twitter").await.unwrap();
        assert_eq!(token.expose_secret(), "env-token");
    }

    #[tokio::test]
    async fn test_unmapped_key_is_not_found() {
        let store = EnvCredentialStore::new();

        let result = store.bearer_token("twitter").await;
        assert!(matches!(result, Err(CredentialError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unset_var_is_not_found() {
        let store =
            EnvCredentialStore::new().with_mapping("twitter", "REQUOTE_TEST_TOKEN_UNSET_B");

        let result = store.bearer_token("twitter").await;
        assert!(matches!(result, Err(CredentialError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_var_is_not_found() {
        unsafe { std::env::set_var("REQUOTE_TEST_TOKEN_C", "  ") };
        let store = EnvCredentialStore::new().with_mapping("twitter", "REQUOTE_TEST_TOKEN_C");

        let result = store.bearer_token("twitter").await;
        assert!(matches!(result, Err(CredentialError::NotFound(_))));
    }
}
