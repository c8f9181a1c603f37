//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub secrets: SecretsConfig,

    #[serde(default)]
    pub x: XConfig,

    #[serde(default)]
    pub comment: CommentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Fallback username when the trigger carries no source
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Credential store backend: "file" or "env"
    #[serde(default = "default_secrets_backend")]
    pub backend: String,

    /// Path to the TOML secrets file (file backend)
    #[serde(default = "default_secrets_file")]
    pub file: PathBuf,

    /// Logical key of the bearer token in the store
    #[serde(default = "default_secret_key")]
    pub key: String,

    /// Environment variable holding the token (env backend)
    #[serde(default = "default_bearer_token_env")]
    pub bearer_token_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XConfig {
    #[serde(default = "default_x_base_url")]
    pub base_url: String,

    #[serde(default = "default_x_max_chars")]
    pub max_chars: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentConfig {
    /// Override the canned sample list; empty keeps the built-in defaults
    #[serde(default)]
    pub samples: Vec<String>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_source() -> String {
    "elonmusk".to_string()
}

fn default_secrets_backend() -> String {
    "file".to_string()
}

fn default_secrets_file() -> PathBuf {
    PathBuf::from("./secrets.toml")
}

fn default_secret_key() -> String {
    "twitter".to_string()
}

fn default_bearer_token_env() -> String {
    "X_BEARER_TOKEN".to_string()
}

fn default_x_base_url() -> String {
    "https://api.twitter.com".to_string()
}

fn default_x_max_chars() -> usize {
    280
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            source: default_source(),
            dry_run: false,
        }
    }
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            backend: default_secrets_backend(),
            file: default_secrets_file(),
            key: default_secret_key(),
            bearer_token_env: default_bearer_token_env(),
        }
    }
}

impl Default for XConfig {
    fn default() -> Self {
        Self {
            base_url: default_x_base_url(),
            max_chars: default_x_max_chars(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("REQUOTE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# requote configuration

[general]
log_level = "info"
# Username scanned when the trigger carries no source
source = "elonmusk"
dry_run = false

[secrets]
backend = "file"  # file, env
file = "./secrets.toml"
key = "twitter"
# Used by the env backend
bearer_token_env = "X_BEARER_TOKEN"

[x]
base_url = "https://api.twitter.com"
max_chars = 280

[comment]
# Override the canned reaction samples; empty keeps the defaults
samples = []
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.general.source, "elonmusk");
        assert_eq!(config.secrets.key, "twitter");
        assert_eq!(config.x.max_chars, 280);
        assert!(config.comment.samples.is_empty());
    }

    #[test]
    fn test_example_toml_round_trips() {
        let parsed: AppConfig = toml::from_str(&AppConfig::example_toml()).expect("valid toml");
        assert_eq!(parsed.secrets.backend, "file");
        assert_eq!(parsed.x.base_url, "https://api.twitter.com");
    }
}
