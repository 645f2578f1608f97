// src/formatter/mod.rs
//! Wire formats pairing an IV with its ciphertext in one string
//!
//! A [`Formatter`] is stateless: implementations are plain unit structs,
//! `Send + Sync`, and can be shared between encryptors behind an `Arc`.

mod base64;
mod hex;

pub use self::base64::Base64Formatter;
pub use self::hex::HexFormatter;

use std::fmt;

use crate::error::ParsingError;

pub type Result<T> = std::result::Result<T, ParsingError>;

/// An IV and the payload that travelled with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    pub iv: Vec<u8>,
    pub payload: Vec<u8>,
}

/// Encodes an (IV, ciphertext) pair into one transportable string and back
pub trait Formatter: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and error messages
    fn name(&self) -> &'static str;

    /// Deterministic, lossless encoding of `iv` and `payload`
    fn format(&self, iv: &[u8], payload: &[u8]) -> String;

    /// Inverse of [`Formatter::format`]
    ///
    /// `iv_length` is the IV size of the cipher in use; formats that
    /// concatenate IV and payload without a delimiter split on it.
    ///
    /// # Errors
    ///
    /// [`ParsingError`] when `input` is not a valid encoding for this format.
    fn parse(&self, input: &str, iv_length: usize) -> Result<FormattedRecord>;
}
