// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Failures raised by the cipher primitives in [`crate::core::cipher`].
///
/// These pass through [`crate::Encryptor`] untouched, wrapped only in
/// [`CoreError::Cipher`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Unsupported cipher method: \"{0}\"")]
    UnsupportedCipher(String),

    #[error("Invalid key length for {cipher}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        cipher: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid IV length for {cipher}: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        cipher: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Bad padding, truncated input or a failed authentication tag
    #[error("Decryption failed with {0}: invalid ciphertext, key or IV")]
    Decryption(&'static str),

    #[error("Encryption failed with {0}")]
    Encryption(&'static str),
}

/// Failures raised by a [`crate::formatter::Formatter`] while parsing input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    #[error("Unable to parse the given data with the \"{formatter}\" formatter: expected 2 parts, found {found}")]
    PartCount {
        formatter: &'static str,
        found: usize,
    },

    #[error("Unable to parse the given data with the \"base64\" formatter: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Unable to parse the given data with the \"hex\" formatter: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Unable to parse the given data with the \"{formatter}\" formatter: {actual} bytes is shorter than the {iv_length}-byte IV")]
    Truncated {
        formatter: &'static str,
        iv_length: usize,
        actual: usize,
    },

    #[error("Unable to parse the given data: formatted input is not valid UTF-8")]
    NotUtf8,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No Initialization Vector set to this encryptor: unable to decrypt data")]
    MissingIv,

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
