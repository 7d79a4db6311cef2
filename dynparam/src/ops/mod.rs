//! Core operations.
//!
//! This module contains the business logic for dynparam commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;

use std::path::Path;

use dynparam_codegen::{PackageLocator, Target};
pub use check::check;
pub use clean::clean;
pub use generate::generate;

/// An explicit package directory, or the search path from the environment.
fn locator(package_dir: Option<&Path>) -> PackageLocator {
    package_dir
        .map(PackageLocator::root)
        .unwrap_or_else(PackageLocator::from_env)
}

/// One-line description of what is being generated.
fn progress_line(target: &Target) -> String {
    format!(
        "Generating reconfiguration files for {} in {}",
        target.name, target.package
    )
}
