//! `passvault init` — generate the encryption key and create the database.

use std::fs;

use crate::cli::output;
use crate::cli::{key_path, vault_dir, Cli};
use crate::errors::{Result, VaultError};
use crate::keystore::KeyStore;
use crate::store::RecordStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let dir = vault_dir(cli)?;

    // 1. Create the vault directory if it doesn't exist.
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        output::info(&format!("Created vault directory: {}", dir.display()));
    }

    // 2. Generate the key. Fails if the vault is already initialized —
    //    regenerating would orphan every stored record.
    let keys = KeyStore::new(key_path(cli)?);
    if keys.exists() {
        output::tip("Use `passvault add` to store credentials in the existing vault.");
        return Err(VaultError::AlreadyInitialized(keys.path().to_path_buf()));
    }
    keys.generate()?;
    output::success(&format!(
        "Encryption key generated and saved to {}",
        keys.path().display()
    ));

    // 3. Create the record database and its schema.
    let db = RecordStore::db_path(&dir);
    RecordStore::open(&db)?;
    output::success(&format!("Record database created at {}", db.display()));

    // 4. Show helpful tips.
    output::tip("Run `passvault add <SERVICE> <USERNAME>` to store a credential.");
    output::tip("Run `passvault get <SERVICE> <USERNAME>` to retrieve one.");

    Ok(())
}
