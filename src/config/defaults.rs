// src/config/defaults.rs
use crate::config::app::EncryptorSettings;
use crate::consts::DEFAULT_CIPHER;

pub fn default_cipher() -> String {
    DEFAULT_CIPHER.into()
}

pub fn default_auto_iv_update() -> bool {
    true
}

pub fn default_encryptor() -> EncryptorSettings {
    EncryptorSettings {
        cipher: default_cipher(),
        auto_iv_update: default_auto_iv_update(),
        formatter: None,
    }
}
