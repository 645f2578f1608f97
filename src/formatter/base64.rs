// src/formatter/base64.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{FormattedRecord, Formatter, Result};
use crate::consts::BASE64_DELIMITER;
use crate::error::ParsingError;

/// `base64(iv) ":" base64(payload)`, standard padded alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Formatter;

impl Formatter for Base64Formatter {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn format(&self, iv: &[u8], payload: &[u8]) -> String {
        format!(
            "{}{}{}",
            STANDARD.encode(iv),
            BASE64_DELIMITER,
            STANDARD.encode(payload)
        )
    }

    // The base64 alphabet never contains ':', so the delimiter count alone
    // decides the structure. `_iv_length` is unused here.
    fn parse(&self, input: &str, _iv_length: usize) -> Result<FormattedRecord> {
        let parts: Vec<&str> = input.split(BASE64_DELIMITER).collect();
        let [iv, payload] = parts.as_slice() else {
            return Err(ParsingError::PartCount {
                formatter: self.name(),
                found: parts.len(),
            });
        };

        Ok(FormattedRecord {
            iv: STANDARD.decode(iv)?,
            payload: STANDARD.decode(payload)?,
        })
    }
}
