//! The vault's master key.
//!
//! A single 32-byte symmetric key encrypts every stored password for the
//! lifetime of the vault. The wrapper zeroes its memory when dropped so
//! the key cannot linger after the session ends.

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use zeroize::Zeroize;

/// Length of the master key in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// A wrapper around the 32-byte master key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Generate a fresh random key from the OS CSPRNG.
    pub fn generate() -> Self {
        Self::new(Aes256Gcm::generate_key(OsRng).into())
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
