//! `passvault get` — retrieve and print a single stored password.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, service: &str, username: &str) -> Result<()> {
    let vault = open_vault(cli)?;

    // "No matching entry" is an answer, not a failure — only key and
    // decryption problems surface as errors.
    match vault.retrieve(service, username)? {
        Some(password) => println!("{password}"),
        None => output::info(&format!("No password found for '{service}/{username}'.")),
    }

    Ok(())
}
