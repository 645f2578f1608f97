// src/core/cipher.rs
//! Named AES cipher methods — no IV management, no formatting
//!
//! Cipher identifiers follow OpenSSL naming (`AES-256-CBC`, `aes-128-ctr`, ...)
//! and are matched case-insensitively. Every function here works on
//! in-memory buffers and validates key and IV lengths exactly.

use std::fmt;
use std::str::FromStr;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm};

use crate::consts::{AES_BLOCK_IV_LENGTH, AES_GCM_IV_LENGTH};
use crate::error::CipherError;

pub type Result<T> = std::result::Result<T, CipherError>;

/// Supported cipher methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CipherAlgorithm {
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Aes128Ctr,
    Aes192Ctr,
    Aes256Ctr,
    /// 16-byte tag appended to the ciphertext
    Aes128Gcm,
    /// 16-byte tag appended to the ciphertext
    Aes256Gcm,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 8] = [
        CipherAlgorithm::Aes128Cbc,
        CipherAlgorithm::Aes192Cbc,
        CipherAlgorithm::Aes256Cbc,
        CipherAlgorithm::Aes128Ctr,
        CipherAlgorithm::Aes192Ctr,
        CipherAlgorithm::Aes256Ctr,
        CipherAlgorithm::Aes128Gcm,
        CipherAlgorithm::Aes256Gcm,
    ];

    /// Canonical OpenSSL-style identifier
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128Cbc => "AES-128-CBC",
            Self::Aes192Cbc => "AES-192-CBC",
            Self::Aes256Cbc => "AES-256-CBC",
            Self::Aes128Ctr => "AES-128-CTR",
            Self::Aes192Ctr => "AES-192-CTR",
            Self::Aes256Ctr => "AES-256-CTR",
            Self::Aes128Gcm => "AES-128-GCM",
            Self::Aes256Gcm => "AES-256-GCM",
        }
    }

    pub fn key_length(self) -> usize {
        match self {
            Self::Aes128Cbc | Self::Aes128Ctr | Self::Aes128Gcm => 16,
            Self::Aes192Cbc | Self::Aes192Ctr => 24,
            Self::Aes256Cbc | Self::Aes256Ctr | Self::Aes256Gcm => 32,
        }
    }

    pub fn iv_length(self) -> usize {
        match self {
            Self::Aes128Gcm | Self::Aes256Gcm => AES_GCM_IV_LENGTH,
            _ => AES_BLOCK_IV_LENGTH,
        }
    }

    pub fn encrypt(self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.check_lengths(key, iv)?;
        match self {
            Self::Aes128Cbc => cbc_encrypt::<cbc::Encryptor<Aes128>>(self, key, iv, plaintext),
            Self::Aes192Cbc => cbc_encrypt::<cbc::Encryptor<Aes192>>(self, key, iv, plaintext),
            Self::Aes256Cbc => cbc_encrypt::<cbc::Encryptor<Aes256>>(self, key, iv, plaintext),
            Self::Aes128Ctr => ctr_apply::<ctr::Ctr128BE<Aes128>>(self, key, iv, plaintext),
            Self::Aes192Ctr => ctr_apply::<ctr::Ctr128BE<Aes192>>(self, key, iv, plaintext),
            Self::Aes256Ctr => ctr_apply::<ctr::Ctr128BE<Aes256>>(self, key, iv, plaintext),
            Self::Aes128Gcm => gcm_encrypt::<Aes128Gcm>(self, key, iv, plaintext),
            Self::Aes256Gcm => gcm_encrypt::<Aes256Gcm>(self, key, iv, plaintext),
        }
    }

    pub fn decrypt(self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.check_lengths(key, iv)?;
        match self {
            Self::Aes128Cbc => cbc_decrypt::<cbc::Decryptor<Aes128>>(self, key, iv, ciphertext),
            Self::Aes192Cbc => cbc_decrypt::<cbc::Decryptor<Aes192>>(self, key, iv, ciphertext),
            Self::Aes256Cbc => cbc_decrypt::<cbc::Decryptor<Aes256>>(self, key, iv, ciphertext),
            // CTR is its own inverse
            Self::Aes128Ctr => ctr_apply::<ctr::Ctr128BE<Aes128>>(self, key, iv, ciphertext),
            Self::Aes192Ctr => ctr_apply::<ctr::Ctr128BE<Aes192>>(self, key, iv, ciphertext),
            Self::Aes256Ctr => ctr_apply::<ctr::Ctr128BE<Aes256>>(self, key, iv, ciphertext),
            Self::Aes128Gcm => gcm_decrypt::<Aes128Gcm>(self, key, iv, ciphertext),
            Self::Aes256Gcm => gcm_decrypt::<Aes256Gcm>(self, key, iv, ciphertext),
        }
    }

    fn check_lengths(self, key: &[u8], iv: &[u8]) -> Result<()> {
        if key.len() != self.key_length() {
            return Err(CipherError::InvalidKeyLength {
                cipher: self.name(),
                expected: self.key_length(),
                actual: key.len(),
            });
        }
        if iv.len() != self.iv_length() {
            return Err(CipherError::InvalidIvLength {
                cipher: self.name(),
                expected: self.iv_length(),
                actual: iv.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        CipherAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CipherError::UnsupportedCipher(s.to_owned()))
    }
}

/// IV length required by the named cipher
pub fn cipher_iv_length(cipher_id: &str) -> Result<usize> {
    Ok(cipher_id.parse::<CipherAlgorithm>()?.iv_length())
}

/// Encrypt `plaintext` with the named cipher
pub fn cipher_encrypt(
    key: &[u8],
    cipher_id: &str,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    cipher_id.parse::<CipherAlgorithm>()?.encrypt(key, iv, plaintext)
}

/// Decrypt `ciphertext` with the named cipher
pub fn cipher_decrypt(
    key: &[u8],
    cipher_id: &str,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    cipher_id.parse::<CipherAlgorithm>()?.decrypt(key, iv, ciphertext)
}

fn cbc_encrypt<E>(
    algo: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>>
where
    E: KeyIvInit + BlockEncryptMut,
{
    let cipher = E::new_from_slices(key, iv).map_err(|_| CipherError::Encryption(algo.name()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<D>(
    algo: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let cipher = D::new_from_slices(key, iv).map_err(|_| CipherError::Decryption(algo.name()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::Decryption(algo.name()))
}

fn ctr_apply<S>(
    algo: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
) -> Result<Vec<u8>>
where
    S: KeyIvInit + StreamCipher,
{
    let mut cipher =
        S::new_from_slices(key, iv).map_err(|_| CipherError::Encryption(algo.name()))?;
    let mut output = input.to_vec();
    cipher.apply_keystream(&mut output);
    Ok(output)
}

// Callers have already checked the IV is AES_GCM_IV_LENGTH bytes, so
// GenericArray::from_slice cannot panic.
fn gcm_encrypt<A>(
    algo: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>>
where
    A: KeyInit + Aead,
{
    let cipher = A::new_from_slice(key).map_err(|_| CipherError::Encryption(algo.name()))?;
    cipher
        .encrypt(GenericArray::from_slice(iv), plaintext)
        .map_err(|_| CipherError::Encryption(algo.name()))
}

fn gcm_decrypt<A>(
    algo: CipherAlgorithm,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>>
where
    A: KeyInit + Aead,
{
    let cipher = A::new_from_slice(key).map_err(|_| CipherError::Decryption(algo.name()))?;
    cipher
        .decrypt(GenericArray::from_slice(iv), ciphertext)
        .map_err(|_| CipherError::Decryption(algo.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back_case_insensitively() {
        for algo in CipherAlgorithm::ALL {
            assert_eq!(algo.name().parse::<CipherAlgorithm>().unwrap(), algo);
            assert_eq!(
                algo.name().to_lowercase().parse::<CipherAlgorithm>().unwrap(),
                algo
            );
        }
    }

    #[test]
    fn test_check_lengths_reports_key_before_iv() {
        let err = CipherAlgorithm::Aes256Cbc
            .check_lengths(&[0u8; 5], &[0u8; 3])
            .unwrap_err();
        assert!(matches!(
            err,
            CipherError::InvalidKeyLength {
                expected: 32,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_gcm_tag_is_appended() {
        let ct = CipherAlgorithm::Aes128Gcm
            .encrypt(&[1u8; 16], &[2u8; 12], b"abc")
            .unwrap();
        assert_eq!(ct.len(), 3 + 16);
    }

    #[test]
    fn test_cbc_pads_to_block() {
        let ct = CipherAlgorithm::Aes256Cbc
            .encrypt(&[0u8; 32], &[0u8; 16], b"data")
            .unwrap();
        assert_eq!(ct.len(), 16);

        let ct = CipherAlgorithm::Aes256Cbc
            .encrypt(&[0u8; 32], &[0u8; 16], &[7u8; 16])
            .unwrap();
        assert_eq!(ct.len(), 32);
    }
}
