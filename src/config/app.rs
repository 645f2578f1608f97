// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CIPHER_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::enums::FormatterKind;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_encryptor")]
    pub encryptor: EncryptorSettings,
}

/// The `[encryptor]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptorSettings {
    #[serde(default = "default_cipher")]
    pub cipher: String,
    #[serde(default = "default_auto_iv_update")]
    pub auto_iv_update: bool,
    /// `None` produces raw ciphertext
    #[serde(default)]
    pub formatter: Option<FormatterKind>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            encryptor: default_encryptor(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply `IV_ENCRYPTOR_CIPHER` if it is set and non-empty
    pub fn apply_env_overrides(&mut self) {
        if let Ok(cipher) = std::env::var(CIPHER_ENV) {
            if !cipher.trim().is_empty() {
                debug!(%cipher, "cipher overridden from environment");
                self.encryptor.cipher = cipher;
            }
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            Config::from_file(&config_path).unwrap_or_else(|err| {
                warn!(path = %config_path, error = %err, "unreadable config, using built-in defaults");
                Config::default()
            })
        } else {
            warn!(path = %config_path, "config file not found, using built-in defaults");
            Config::default()
        };

        conf.apply_env_overrides();
        conf
    })
}
