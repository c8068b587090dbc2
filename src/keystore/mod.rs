//! Master key lifecycle: generate, persist, load.
//!
//! The key lives as raw bytes in a single file (`key.key`) inside the
//! vault directory. It is generated exactly once per vault — there is
//! no rotation and no automatic regeneration, so every stored record
//! must have been sealed under the key currently on disk.
//!
//! The key file is plaintext on disk. A production vault would wrap it
//! with a passphrase-derived key; this one deliberately does not.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use crate::crypto::keys::{MasterKey, KEY_LEN};
use crate::errors::{Result, VaultError};

/// Handle to the on-disk key file.
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    /// Create a handle for the key file at `path`. Touches nothing on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-failing check for whether a key has been generated.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Generate a fresh random key, write it to the key file, and
    /// return it.
    ///
    /// Refuses to overwrite an existing key file: regenerating would
    /// orphan every record sealed under the old key.
    pub fn generate(&self) -> Result<MasterKey> {
        if self.path.exists() {
            return Err(VaultError::AlreadyInitialized(self.path.clone()));
        }

        let key = MasterKey::generate();

        // Ensure the parent directory exists.
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    VaultError::KeyPersistence(format!("cannot create key directory: {e}"))
                })?;
            }
        }

        fs::write(&self.path, key.as_bytes())
            .map_err(|e| VaultError::KeyPersistence(format!("failed to write key file: {e}")))?;

        // On Unix, restrict permissions to owner-only read/write.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|e| {
                VaultError::KeyPersistence(format!("failed to set key file permissions: {e}"))
            })?;
        }

        Ok(key)
    }

    /// Load the key from disk, validating its length.
    pub fn load(&self) -> Result<MasterKey> {
        if !self.path.exists() {
            return Err(VaultError::KeyNotFound(self.path.clone()));
        }

        let mut data = fs::read(&self.path)?;

        if data.len() != KEY_LEN {
            return Err(VaultError::KeyCorrupt {
                expected: KEY_LEN,
                actual: data.len(),
            });
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&data);

        // Wipe the intermediate buffer before it is dropped.
        data.zeroize();

        Ok(MasterKey::new(bytes))
    }
}
