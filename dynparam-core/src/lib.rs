//! Core utilities and types for the dynparam generator.
//!
//! This crate provides the closed parameter type system, the placeholder
//! template engine and the file helpers shared by the manifest parser,
//! the code generator and the CLI.

mod error;
mod file;
pub mod fs;
pub mod template;
mod type_mapper;
mod types;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use template::{Template, TemplateVars};
// Fundamental types
pub use type_mapper::{CppTypeMapper, TypeMapper};
pub use types::{ParamType, UnknownParamType, Value};
// String utilities
pub use utils::{escape_c_string, escape_line_path, escape_xml_attr, python_str_literal};
