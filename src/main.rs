use clap::Parser;
use std::process;

use taskly::cli;
use taskly::cli::commands::{Cli, Commands};
use taskly::models::Status;

fn main() {
    let cli_args = Cli::parse();

    let exit_code = match cli_args.command {
        Commands::Add { description } => cli::add::run(&description.join(" ")),
        Commands::Update { id, description } => cli::update::run(id, &description.join(" ")),
        Commands::Delete { id } => cli::delete::run(id),
        Commands::MarkInProgress { id } => cli::mark::run(id, Status::InProgress),
        Commands::MarkDone { id } => cli::mark::run(id, Status::Done),
        Commands::List { status } => cli::list::run(status),
    };

    process::exit(exit_code);
}
