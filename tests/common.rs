// tests/common.rs
//! Shared test utilities — log capture and fixtures
#![allow(dead_code)]

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 32 ASCII bytes, valid as an AES-256 key
pub const SECRET: &[u8] = b"452F93C1A737722D8B4ED8DD58766D99";
pub const CIPHER: &str = "AES-256-CBC";
pub const DATA: &[u8] = b"data";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Random IV sized for `cipher`
pub fn random_iv(cipher: &str) -> Vec<u8> {
    let len = iv_encryptor::cipher_iv_length(cipher).unwrap();
    iv_encryptor::random_bytes(len)
}
