// src/lib.rs
//! iv-encryptor — symmetric encryption with managed initialization vectors
//!
//! Features:
//! - Named AES cipher methods (CBC, CTR, GCM)
//! - Lazy IV generation with rotate-after-encrypt
//! - Pluggable wire formats carrying the IV alongside the ciphertext
//! - Key material held in secure-gate secrets
//!
//! ```
//! use iv_encryptor::{Encryptor, HexFormatter};
//!
//! let mut encryptor = Encryptor::new(vec![0u8; 32], "AES-256-CBC").with_formatter(HexFormatter);
//! let sealed = encryptor.encrypt(b"data").unwrap();
//! assert_eq!(encryptor.decrypt(&sealed).unwrap(), b"data");
//! ```

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod encryptor;
pub mod enums;
pub mod error;
pub mod formatter;

// Re-export everything users need at the crate root
pub use aliases::SecretKey;
pub use config::load as load_config;
pub use crate::core::{
    cipher_decrypt, cipher_encrypt, cipher_iv_length, random_bytes, CipherAlgorithm,
};
pub use encryptor::Encryptor;
pub use enums::{Ciphertext, FormatterKind};
pub use error::{CipherError, CoreError, ParsingError, Result};
pub use formatter::{Base64Formatter, FormattedRecord, Formatter, HexFormatter};
