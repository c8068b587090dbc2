//! `passvault delete` — remove all credentials matching a service/username pair.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, service: &str, username: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all entries for '{service}/{username}'?"))
            .default(false)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let vault = open_vault(cli)?;
    let deleted = vault.delete(service, username)?;

    if deleted == 0 {
        output::info(&format!("No entries found for '{service}/{username}'."));
    } else if deleted == 1 {
        output::success(&format!("Deleted 1 entry for '{service}/{username}'."));
    } else {
        output::success(&format!("Deleted {deleted} entries for '{service}/{username}'."));
    }

    Ok(())
}
