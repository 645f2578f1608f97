// src/config/mod.rs
//! Configuration system for iv-encryptor
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, EncryptorSettings};

mod app;
mod defaults;
