//! Small utility functions used across the core module
//!
//! Keep this light — if it grows, split further.

use rand::RngCore;

/// Fill a fresh buffer of `len` bytes from the thread-local CSPRNG
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}
