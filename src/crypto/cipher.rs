//! AES-256-GCM authenticated encryption of a single secret string.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext, so the stored blob is self-contained
//! and `open` needs nothing beyond the blob and the key.
//!
//! Layout of a sealed blob:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use zeroize::Zeroize;

use crate::crypto::keys::MasterKey;
use crate::errors::{Result, VaultError};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt and authenticate `plaintext` under `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
/// Two seals of the same plaintext produce different blobs because a
/// new nonce is drawn every time.
pub fn seal(key: &MasterKey, plaintext: &str) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::Encryption(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| VaultError::Encryption(format!("encryption error: {e}")))?;

    // Prepend the nonce so storage only needs to hold one blob.
    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt and verify a blob produced by `seal`.
///
/// Expects the first 12 bytes to be the nonce, followed by the
/// ciphertext and tag. Any tag mismatch — wrong key, corrupted or
/// tampered storage — fails with `Authentication`, never with
/// garbage plaintext.
pub fn open(key: &MasterKey, blob: &[u8]) -> Result<String> {
    // Anything shorter than a nonce cannot have come from `seal`.
    if blob.len() < NONCE_LEN {
        return Err(VaultError::Authentication);
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultError::Authentication)?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| VaultError::Authentication)?;

    // `seal` only accepts strings, so authenticated plaintext that is
    // not valid UTF-8 did not come from us. Wipe it before discarding.
    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        VaultError::Authentication
    })
}
