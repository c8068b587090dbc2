//! One module per subcommand.

pub mod add;
pub mod delete;
pub mod get;
pub mod init;
pub mod update;
