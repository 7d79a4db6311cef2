use std::path::PathBuf;

use clap::Args;
use dynparam_codegen::TEMPLATE_DIR_ENV;
use dynparam_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to params.toml (defaults to ./params.toml)
    #[arg(short, long, default_value = "params.toml")]
    pub config: PathBuf,

    /// Package root to write into (defaults to a search of DYNPARAM_PACKAGE_PATH)
    #[arg(long, env = "DYNPARAM_PACKAGE_DIR")]
    pub package_dir: Option<PathBuf>,

    /// Directory with ConfigType.h / ConfigType.py overrides
    #[arg(long, env = TEMPLATE_DIR_ENV)]
    pub templates: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let mut out = TerminalOutput::new();

        let report = ops::generate(
            &manifest,
            ops::generate::GenerateOptions {
                config_path: &self.config,
                package_dir: self.package_dir.as_deref(),
                templates: self.templates.as_deref(),
                dry_run: self.dry_run,
            },
            &mut out,
        )?;

        report.render(&mut out);
        Ok(())
    }
}
