mod check;
mod clean;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dynparam_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dynparam")]
#[command(version)]
#[command(about = "Generate reconfigurable parameter definitions from params.toml")]
pub(crate) struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header, module and documentation from params.toml
    Generate(GenerateCommand),

    /// Validate params.toml without generating files
    Check(CheckCommand),

    /// Remove files left over from the message based scheme
    Clean(CleanCommand),
}
