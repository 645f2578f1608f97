// src/consts.rs
//! Shared constants — cipher defaults, wire format and environment names

/// Cipher used when neither the config file nor the environment picks one
pub const DEFAULT_CIPHER: &str = "AES-256-CBC";

/// Separator between the IV and payload segments of the base64 format
pub const BASE64_DELIMITER: char = ':';

/// IV length for CBC and CTR modes (one AES block)
pub const AES_BLOCK_IV_LENGTH: usize = 16;

/// Nonce length for AES-GCM
pub const AES_GCM_IV_LENGTH: usize = 12;

/// Path of the TOML config file
pub const CONFIG_PATH_ENV: &str = "IV_ENCRYPTOR_CONFIG";

/// Overrides `encryptor.cipher` from the config file
pub const CIPHER_ENV: &str = "IV_ENCRYPTOR_CIPHER";

pub const DEFAULT_CONFIG_PATH: &str = "iv-encryptor.toml";
