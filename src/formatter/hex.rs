// src/formatter/hex.rs
use super::{FormattedRecord, Formatter, Result};
use crate::error::ParsingError;

/// `hex(iv || payload)`, lowercase, no delimiter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexFormatter;

impl Formatter for HexFormatter {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn format(&self, iv: &[u8], payload: &[u8]) -> String {
        let mut joined = Vec::with_capacity(iv.len() + payload.len());
        joined.extend_from_slice(iv);
        joined.extend_from_slice(payload);
        hex::encode(joined)
    }

    fn parse(&self, input: &str, iv_length: usize) -> Result<FormattedRecord> {
        let mut decoded = hex::decode(input)?;
        if decoded.len() < iv_length {
            return Err(ParsingError::Truncated {
                formatter: self.name(),
                iv_length,
                actual: decoded.len(),
            });
        }

        let payload = decoded.split_off(iv_length);
        Ok(FormattedRecord {
            iv: decoded,
            payload,
        })
    }
}
