// src/core/mod.rs
//! Cipher primitives and randomness — no IV state, no formatting
//!
//! Everything the [`crate::Encryptor`] treats as a black box lives here.
pub mod cipher;
pub mod util;

pub use cipher::{cipher_decrypt, cipher_encrypt, cipher_iv_length, CipherAlgorithm};
pub use util::random_bytes;
