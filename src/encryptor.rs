// src/encryptor.rs
//! IV-managing encryptor — the stateful half of the crate
//!
//! An [`Encryptor`] owns a key, a cipher identifier, the current IV and an
//! optional [`Formatter`]. Every state-touching method takes `&mut self`;
//! share an instance across threads only behind your own lock.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::aliases::SecretKey;
use crate::config::EncryptorSettings;
use crate::core::{cipher_decrypt, cipher_encrypt, cipher_iv_length, random_bytes};
use crate::enums::Ciphertext;
use crate::error::{CoreError, ParsingError, Result};
use crate::formatter::Formatter;

pub struct Encryptor {
    secret: SecretKey,
    cipher: String,
    iv: Option<Vec<u8>>,
    auto_iv_update: bool,
    formatter: Option<Arc<dyn Formatter>>,
}

impl Encryptor {
    /// The cipher identifier is not checked until the first encrypt,
    /// decrypt or IV generation.
    pub fn new(secret: impl Into<Vec<u8>>, cipher: impl Into<String>) -> Self {
        Self {
            secret: SecretKey::new(secret.into()),
            cipher: cipher.into(),
            iv: None,
            auto_iv_update: true,
            formatter: None,
        }
    }

    /// Build an encryptor from the `[encryptor]` config section
    pub fn from_settings(secret: impl Into<Vec<u8>>, settings: &EncryptorSettings) -> Self {
        let mut encryptor = Self::new(secret, settings.cipher.as_str());
        encryptor.auto_iv_update = settings.auto_iv_update;
        encryptor.formatter = settings.formatter.map(|kind| kind.build());
        encryptor
    }

    /// Builder-style [`Encryptor::set_formatter`]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Encrypt `plaintext` with the current IV.
    ///
    /// An IV is generated first if none is set. With auto-update enabled a
    /// fresh IV is generated *after* encrypting, ready for the next call.
    ///
    /// # Errors
    ///
    /// [`CoreError::Cipher`] for an unknown cipher or a key/IV of the wrong
    /// length.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Ciphertext> {
        let iv = match self.iv.clone() {
            Some(iv) => iv,
            None => self.generate_iv()?.to_vec(),
        };

        let raw = cipher_encrypt(self.secret.expose_secret(), &self.cipher, &iv, plaintext)?;
        let output = match &self.formatter {
            Some(formatter) => {
                trace!(formatter = formatter.name(), "formatting ciphertext");
                Ciphertext::Formatted(formatter.format(&iv, &raw))
            }
            None => Ciphertext::Raw(raw),
        };

        // Rotation happens after encrypting, never before
        if self.auto_iv_update {
            self.generate_iv()?;
        }

        Ok(output)
    }

    /// Decrypt `data` produced by [`Encryptor::encrypt`].
    ///
    /// With a formatter set, `data` must be the formatted string; the IV it
    /// carries replaces the one currently held (an empty one clears it). Without a formatter, `data`
    /// is raw ciphertext and the current IV is used. Never rotates the IV.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Parsing`] when the formatter rejects `data`
    /// - [`CoreError::MissingIv`] when no IV is held or `data` carries an
    ///   empty one
    /// - [`CoreError::Cipher`] when the primitive fails
    pub fn decrypt(&mut self, data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let data = data.as_ref();

        let payload = match &self.formatter {
            Some(formatter) => {
                let input = std::str::from_utf8(data).map_err(|_| ParsingError::NotUtf8)?;
                let iv_length = cipher_iv_length(&self.cipher)?;
                let record = formatter.parse(input, iv_length)?;
                trace!(formatter = formatter.name(), "parsed IV from input");
                self.iv = Some(record.iv).filter(|iv| !iv.is_empty());
                record.payload
            }
            None => data.to_vec(),
        };

        let iv = self.iv.as_deref().ok_or(CoreError::MissingIv)?;
        Ok(cipher_decrypt(
            self.secret.expose_secret(),
            &self.cipher,
            iv,
            &payload,
        )?)
    }

    /// Replace the IV with fresh random bytes sized for the cipher
    ///
    /// # Errors
    ///
    /// [`CoreError::Cipher`] when the cipher identifier is unknown.
    pub fn generate_iv(&mut self) -> Result<&[u8]> {
        let iv = self.random_iv()?;
        Ok(self.iv.insert(iv).as_slice())
    }

    pub fn enable_auto_iv_update(&mut self) {
        self.auto_iv_update = true;
    }

    pub fn disable_auto_iv_update(&mut self) {
        self.auto_iv_update = false;
    }

    pub fn auto_iv_update(&self) -> bool {
        self.auto_iv_update
    }

    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    /// No length check: a wrong-sized IV fails at the next encrypt/decrypt.
    /// An empty IV counts as no IV at all.
    pub fn set_iv(&mut self, iv: impl Into<Vec<u8>>) {
        self.iv = Some(iv.into()).filter(|iv| !iv.is_empty());
    }

    /// Replace the formatter, or clear it with `None`
    pub fn set_formatter(&mut self, formatter: Option<Arc<dyn Formatter>>) {
        self.formatter = formatter;
    }

    pub fn formatter(&self) -> Option<&dyn Formatter> {
        self.formatter.as_deref()
    }

    pub fn cipher(&self) -> &str {
        &self.cipher
    }

    fn random_iv(&self) -> Result<Vec<u8>> {
        let len = cipher_iv_length(&self.cipher)?;
        debug!(cipher = %self.cipher, len, "generating IV");
        Ok(random_bytes(len))
    }
}

impl fmt::Debug for Encryptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encryptor")
            .field("secret", &"[REDACTED]")
            .field("cipher", &self.cipher)
            .field("iv_set", &self.iv.is_some())
            .field("auto_iv_update", &self.auto_iv_update)
            .field("formatter", &self.formatter.as_ref().map(|f| f.name()))
            .finish()
    }
}
