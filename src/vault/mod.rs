//! High-level vault operations used by CLI commands.
//!
//! `VaultService` composes the key store, the cipher, and the record
//! store so the rest of the application can work with simple calls
//! like `vault.add("github", "alice", "p@ss")`. No plaintext password
//! ever reaches disk: values are sealed before insert/update and only
//! opened on retrieve.

use crate::crypto::{open, seal};
use crate::errors::{Result, VaultError};
use crate::keystore::KeyStore;
use crate::store::RecordStore;

/// The main vault handle. Owns the key store and the record store for
/// the duration of a session.
pub struct VaultService {
    keys: KeyStore,
    records: RecordStore,
}

impl VaultService {
    /// Build a vault from explicit handles. The caller decides where
    /// the key file and database live; the service never reaches for
    /// process-wide state.
    pub fn new(keys: KeyStore, records: RecordStore) -> Self {
        Self { keys, records }
    }

    /// Seal a password and append a new credential record.
    ///
    /// Loads the key and seals the password before touching storage,
    /// so a key or encryption failure leaves no partial write.
    /// Returns the new record id.
    pub fn add(&self, service: &str, username: &str, password: &str) -> Result<i64> {
        validate_field("service", service)?;
        validate_field("username", username)?;

        let key = self.keys.load()?;
        let sealed = seal(&key, password)?;

        self.records.insert(service, username, &sealed)
    }

    /// Decrypt and return the password of the first matching record.
    ///
    /// `Ok(None)` means no matching entry — distinct from
    /// `Authentication`, which means the record exists but was sealed
    /// under a different key or has been tampered with.
    pub fn retrieve(&self, service: &str, username: &str) -> Result<Option<String>> {
        validate_field("service", service)?;
        validate_field("username", username)?;

        let key = self.keys.load()?;

        match self.records.find_first(service, username)? {
            Some(record) => Ok(Some(open(&key, &record.sealed_password)?)),
            None => Ok(None),
        }
    }

    /// Seal a new password and write it to every matching record.
    ///
    /// Returns the number of rows affected; 0 means no matching entry
    /// and nothing was altered.
    pub fn update(&self, service: &str, username: &str, new_password: &str) -> Result<usize> {
        validate_field("service", service)?;
        validate_field("username", username)?;

        let key = self.keys.load()?;
        let sealed = seal(&key, new_password)?;

        self.records.update_password(service, username, &sealed)
    }

    /// Remove every matching record. Returns the number of rows removed.
    ///
    /// Deletion needs no key material, but an uninitialized vault has
    /// nothing to delete from — fail the same way the other operations
    /// do.
    pub fn delete(&self, service: &str, username: &str) -> Result<usize> {
        validate_field("service", service)?;
        validate_field("username", username)?;

        if !self.keys.exists() {
            return Err(VaultError::KeyNotFound(self.keys.path().to_path_buf()));
        }

        self.records.delete(service, username)
    }
}

/// Reject empty service/username values before they reach storage.
fn validate_field(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(VaultError::CommandFailed(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
