//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use super::{DEFAULT_FILENAME, GeneratorConfig, Manifest, ParamSpec, validate::ParseContext};
use crate::{Error, Result};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    generator: GeneratorConfig,
    #[serde(default, rename = "param")]
    params: Vec<RawParam>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParam {
    name: Spanned<String>,
    #[serde(rename = "type")]
    ty: Spanned<String>,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    description: String,
    default: Option<Spanned<toml::Value>>,
    min: Option<Spanned<toml::Value>>,
    max: Option<Spanned<toml::Value>>,
    #[serde(default)]
    edit_method: String,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a params.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a params.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let raw: RawManifest =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;

    let generator_name = raw.generator.name.clone();
    if let Some(reason) = super::validate_identifier(&generator_name) {
        return Err(ctx.source_context().invalid_identifier_error(
            generator_name,
            "generator",
            reason,
            None,
        ));
    }

    let params = raw
        .params
        .into_iter()
        .map(|param| lower_param(&ctx, param))
        .collect::<Result<Vec<_>>>()?;

    Ok(Manifest {
        generator: raw.generator,
        params,
        source_file: ctx.source_context().filename().to_string(),
    })
}

fn lower_param(ctx: &ParseContext, raw: RawParam) -> Result<ParamSpec> {
    ctx.validate_name(&raw.name, "parameter")?;

    let line = ctx.line_of(raw.name.span().start);
    let name = raw.name.into_inner();
    let ty = ctx.param_type(&name, &raw.ty)?;
    let default = ctx.value(&name, "default", raw.default)?;
    let min = ctx.value(&name, "min", raw.min)?;
    let max = ctx.value(&name, "max", raw.max)?;

    Ok(ParamSpec {
        name,
        ty,
        level: raw.level,
        description: raw.description,
        default,
        min,
        max,
        edit_method: raw.edit_method,
        line,
    })
}
