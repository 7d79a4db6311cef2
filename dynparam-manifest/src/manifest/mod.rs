//! Manifest types and parsing for params.toml files.

mod parse;
mod validate;

use std::path::PathBuf;

use dynparam_core::{ParamType, Value};
use serde::Deserialize;
pub use validate::{is_cpp_keyword, validate_identifier};

/// File name looked up when no manifest path is given.
pub const DEFAULT_FILENAME: &str = "params.toml";

/// Root manifest for params.toml
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Generation target
    pub generator: GeneratorConfig,

    /// Parameters in declaration order
    pub params: Vec<ParamSpec>,

    /// Name of the file the manifest was read from
    pub source_file: String,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Package that owns the generated files
    pub package: String,

    /// Node name used in the usage documentation
    pub node: String,

    /// Configuration name; artifacts are named `<name>Config`
    pub name: String,

    /// Directory holding `ConfigType.h` and `ConfigType.py` overrides
    #[serde(default)]
    pub templates: Option<PathBuf>,
}

/// One `[[param]]` entry with its type tag and values checked for shape.
///
/// Whether the values fit the declared type is decided by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: ParamType,
    pub level: u32,
    pub description: String,
    pub default: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub edit_method: String,
    /// 1-based line of the entry's `name` key
    pub line: u32,
}
