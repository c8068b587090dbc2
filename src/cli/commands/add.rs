//! `passvault add` — seal and store a new credential.

use crate::cli::output;
use crate::cli::{open_vault, read_password_value, Cli};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(cli: &Cli, service: &str, username: &str, password: Option<&str>) -> Result<()> {
    let value = read_password_value(&format!("Enter password for {service}/{username}"), password)?;

    let vault = open_vault(cli)?;
    vault.add(service, username, &value)?;

    output::success(&format!("Password for '{service}/{username}' added."));
    Ok(())
}
