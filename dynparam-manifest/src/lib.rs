//! Parsing and validation of `params.toml` parameter manifests.
//!
//! A manifest names the generation target in a `[generator]` table and
//! declares parameters in `[[param]]` entries, in the order they should
//! appear in every generated artifact.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_FILENAME, GeneratorConfig, Manifest, ParamSpec, is_cpp_keyword, validate_identifier,
};
