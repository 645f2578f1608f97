// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the #[derive(...)] enums that represent
//! user-visible choices: wire formats and cipher output.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::formatter::{Base64Formatter, Formatter, HexFormatter};

/// Wire formats an [`crate::Encryptor`] can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FormatterKind {
    Base64,
    Hex,
}

impl FormatterKind {
    /// Instantiate the formatter; the result can be shared between encryptors
    pub fn build(self) -> Arc<dyn Formatter> {
        match self {
            FormatterKind::Base64 => Arc::new(Base64Formatter),
            FormatterKind::Hex => Arc::new(HexFormatter),
        }
    }
}

/// Output of [`crate::Encryptor::encrypt`]
///
/// Raw cipher bytes when no formatter is set, otherwise the formatter's
/// string carrying both the IV and the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ciphertext {
    Raw(Vec<u8>),
    Formatted(String),
}

impl Ciphertext {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Ciphertext::Raw(bytes) => bytes,
            Ciphertext::Formatted(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Ciphertext::Raw(bytes) => bytes,
            Ciphertext::Formatted(text) => text.into_bytes(),
        }
    }

    /// The formatted string, if a formatter produced this output
    pub fn as_formatted(&self) -> Option<&str> {
        match self {
            Ciphertext::Formatted(text) => Some(text),
            Ciphertext::Raw(_) => None,
        }
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, Ciphertext::Formatted(_))
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
