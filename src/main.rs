use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref service,
            ref username,
            ref password,
        } => passvault::cli::commands::add::execute(&cli, service, username, password.as_deref()),
        Commands::Get {
            ref service,
            ref username,
        } => passvault::cli::commands::get::execute(&cli, service, username),
        Commands::Update {
            ref service,
            ref username,
            ref password,
        } => {
            passvault::cli::commands::update::execute(&cli, service, username, password.as_deref())
        }
        Commands::Delete {
            ref service,
            ref username,
            force,
        } => passvault::cli::commands::delete::execute(&cli, service, username, force),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
