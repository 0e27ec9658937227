use anyhow::Result;
use clap::Parser;
use iconmask::cli::{Cli, Commands};
use iconmask::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Build { dry_run, strict } => commands::build::run(&cli, *dry_run, *strict),
        Commands::Check => commands::check::run(&cli),
        Commands::List { prefix } => commands::list::run(&cli, prefix),
        Commands::Resolve {
            prefix,
            reference,
            json,
        } => commands::resolve::run(&cli, prefix, reference, *json),
    }
}
