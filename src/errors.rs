use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Key lifecycle errors ---
    #[error("Encryption key not found at {0} — run `passvault init` first")]
    KeyNotFound(PathBuf),

    #[error("Key file is corrupt: expected {expected} bytes, found {actual}")]
    KeyCorrupt { expected: usize, actual: usize },

    #[error("Failed to persist key: {0}")]
    KeyPersistence(String),

    #[error("Vault already initialized — key file exists at {0}")]
    AlreadyInitialized(PathBuf),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    Authentication,

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
