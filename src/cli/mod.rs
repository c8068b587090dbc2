//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};
use crate::keystore::KeyStore;
use crate::store::RecordStore;
use crate::vault::VaultService;

/// File name of the master key inside the vault directory.
pub const KEY_FILE: &str = "key.key";

/// File name of the record database inside the vault directory.
pub const DB_FILE: &str = "passwords.db";

/// PassVault CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .passvault)
    #[arg(long, default_value = ".passvault", global = true)]
    pub vault_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize the vault (generate the encryption key and database)
    Init,

    /// Add a credential for a service
    Add {
        /// Service name (e.g. github)
        service: String,
        /// Username for the service
        username: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Retrieve a stored password
    Get {
        /// Service name
        service: String,
        /// Username for the service
        username: String,
    },

    /// Update a stored password
    Update {
        /// Service name
        service: String,
        /// Username for the service
        username: String,
        /// New password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Delete all credentials matching a service/username pair
    Delete {
        /// Service name
        service: String,
        /// Username for the service
        username: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the vault directory from the CLI arguments.
pub fn vault_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&cli.vault_dir))
}

/// Build the full path to the key file.
pub fn key_path(cli: &Cli) -> Result<PathBuf> {
    Ok(vault_dir(cli)?.join(KEY_FILE))
}

/// Build the full path to the record database.
pub fn db_path(cli: &Cli) -> Result<PathBuf> {
    Ok(vault_dir(cli)?.join(DB_FILE))
}

/// Open the vault, making sure it is ready first.
///
/// If no key exists yet, offer to generate one. Declining means no
/// operation may proceed — the vault stays uninitialized.
pub fn open_vault(cli: &Cli) -> Result<VaultService> {
    let keys = KeyStore::new(key_path(cli)?);

    if !keys.exists() {
        let generate = dialoguer::Confirm::new()
            .with_prompt("No encryption key found. Generate one now?")
            .default(true)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !generate {
            output::info("A key is required to continue.");
            return Err(VaultError::UserCancelled);
        }

        keys.generate()?;
        output::success(&format!("Encryption key generated at {}", keys.path().display()));
    }

    let records = RecordStore::open(&db_path(cli)?)?;
    Ok(VaultService::new(keys, records))
}

/// Determine a password value from one of three sources.
///
/// Returns `Zeroizing<String>` so the value is wiped from memory on drop.
pub fn read_password_value(prompt: &str, inline: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(v) = inline {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(buf.trim_end().to_string()));
    }

    // Source 3: Interactive secure prompt (default).
    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
