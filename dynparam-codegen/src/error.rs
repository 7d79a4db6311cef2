use std::path::PathBuf;

use dynparam_core::{ParamType, Value};
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A parameter declaration that breaks the type rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("'{name}' has type {ty}, but {field} is the {} {value}", value.kind_name())]
    Type {
        name: String,
        ty: ParamType,
        field: &'static str,
        value: Value,
    },

    #[error("{field} of '{name}' is {value}, which does not fit in an int")]
    OutOfRange {
        name: String,
        field: &'static str,
        value: i64,
    },

    #[error("max or min specified for '{name}', which is of string type")]
    BoundsOnString { name: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Core(#[from] dynparam_core::Error),

    #[error("package '{package}' not found (searched {})", display_paths(searched))]
    PackageNotFound {
        package: String,
        searched: Vec<PathBuf>,
    },

    #[error("error building reconfiguration files for '{name}'")]
    Generate {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
