// src/aliases.rs
//! secure-gate secret types used throughout iv-encryptor

pub use secure_gate::dynamic_alias;

// Caller-supplied encryption key, any length; zeroized on drop
dynamic_alias!(SecretKey, Vec<u8>);
