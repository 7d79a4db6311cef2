use std::path::PathBuf;

use clap::Args;
use dynparam_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to params.toml (defaults to ./params.toml)
    #[arg(short, long, default_value = "params.toml")]
    pub config: PathBuf,

    /// Package root to clean (defaults to a search of DYNPARAM_PACKAGE_PATH)
    #[arg(long, env = "DYNPARAM_PACKAGE_DIR")]
    pub package_dir: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let report = ops::clean(
            &manifest,
            ops::clean::CleanOptions {
                package_dir: self.package_dir.as_deref(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
