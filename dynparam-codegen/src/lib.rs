//! Parameter validation and artifact generation for dynparam.
//!
//! A [`ParameterGenerator`] collects parameter declarations, normalizes each
//! one into a [`Parameter`] and renders, for one [`Target`]:
//!
//! - the C++ configuration header (`cfg/cpp/<package>/<Name>Config.h`),
//! - the parameter reference and usage documentation (`dox/`),
//! - the Python configuration module (`src/<package>/cfg/`),
//!
//! and finally deletes the files of the message based scheme it replaced.
//!
//! # Module Organization
//!
//! - [`files`] - One [`GeneratedFile`](dynparam_core::GeneratedFile) per artifact
//! - [`lint`] - Non-fatal checks over the declared parameters
//! - [`paths`] - Output paths relative to the package root

mod builder;
mod error;
pub mod files;
mod generator;
pub mod lint;
mod literal;
mod obsolete;
mod package;
mod param;
pub mod paths;
mod target;
mod templates;

pub use builder::{CodeBuilder, LINE_DIRECTIVE};
pub use error::{Error, ParamError, Result};
pub use generator::{GenerateResult, ParameterGenerator, PreviewFile};
pub use lint::Diagnostic;
pub use literal::Literal;
pub use obsolete::delete_obsolete;
pub use package::{PACKAGE_PATH_ENV, PackageLocator};
pub use param::{ParamDecl, ParamKind, Parameter, SourceLocation};
pub use target::Target;
pub use templates::{CONFIG_TYPE_H, CONFIG_TYPE_PY, TEMPLATE_DIR_ENV, TemplateSet, TemplateSource};
