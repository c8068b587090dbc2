//! `passvault update` — replace the stored password for a credential.

use crate::cli::output;
use crate::cli::{open_vault, read_password_value, Cli};
use crate::errors::Result;

/// Execute the `update` command.
pub fn execute(cli: &Cli, service: &str, username: &str, password: Option<&str>) -> Result<()> {
    let value = read_password_value(
        &format!("Enter new password for {service}/{username}"),
        password,
    )?;

    let vault = open_vault(cli)?;
    let affected = vault.update(service, username, &value)?;

    // Every row matching (service, username) was rewritten; 0 means
    // there was nothing to update.
    if affected == 0 {
        output::warning("No matching entry found to update.");
    } else if affected == 1 {
        output::success("Password updated successfully.");
    } else {
        output::success(&format!("Password updated for {affected} matching entries."));
    }

    Ok(())
}
