//! Parameter declarations and their normalized, strongly-typed form.

use std::{fmt, panic::Location};

use dynparam_core::{CppTypeMapper, ParamType, TypeMapper, Value};
use dynparam_manifest::ParamSpec;

use crate::{error::ParamError, literal::Literal};

/// Where a parameter was declared.
///
/// Emitted in `#line` directives so that compiler diagnostics in the
/// generated header point at the declaration instead of the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A parameter as declared by the caller, before validation.
///
/// # Example
///
/// ```
/// use dynparam_codegen::{ParamDecl, ParameterGenerator};
/// use dynparam_core::ParamType;
///
/// let mut generator = ParameterGenerator::new();
/// generator
///     .add(ParamDecl::new("rate", ParamType::Double, 0, "loop rate").with_default(10))
///     .unwrap();
/// assert_eq!(generator.parameters()[0].default().to_cpp(), "10.0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: ParamType,
    pub level: u32,
    pub description: String,
    pub default: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub edit_method: String,
}

impl ParamDecl {
    pub fn new(
        name: impl Into<String>,
        ty: ParamType,
        level: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            level,
            description: description.into(),
            default: None,
            min: None,
            max: None,
            edit_method: String::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_min(mut self, value: impl Into<Value>) -> Self {
        self.min = Some(value.into());
        self
    }

    pub fn with_max(mut self, value: impl Into<Value>) -> Self {
        self.max = Some(value.into());
        self
    }

    pub fn with_edit_method(mut self, edit_method: impl Into<String>) -> Self {
        self.edit_method = edit_method.into();
        self
    }
}

impl From<&ParamSpec> for ParamDecl {
    fn from(spec: &ParamSpec) -> Self {
        Self {
            name: spec.name.clone(),
            ty: spec.ty,
            level: spec.level,
            description: spec.description.clone(),
            default: spec.default.clone(),
            min: spec.min.clone(),
            max: spec.max.clone(),
            edit_method: spec.edit_method.clone(),
        }
    }
}

/// Type-specific payload of a normalized parameter.
///
/// Strings carry no bounds; their minimum and maximum render as empty
/// strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    Str { default: String },
    Bool { default: bool, min: bool, max: bool },
    Int { default: i32, min: i32, max: i32 },
    Double { default: f64, min: f64, max: f64 },
}

impl ParamKind {
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamKind::Str { .. } => ParamType::Str,
            ParamKind::Bool { .. } => ParamType::Bool,
            ParamKind::Int { .. } => ParamType::Int,
            ParamKind::Double { .. } => ParamType::Double,
        }
    }

    pub fn default_literal(&self) -> Literal<'_> {
        match self {
            ParamKind::Str { default } => Literal::Str(default),
            ParamKind::Bool { default, .. } => Literal::Bool(*default),
            ParamKind::Int { default, .. } => Literal::Int(*default),
            ParamKind::Double { default, .. } => Literal::Double(*default),
        }
    }

    pub fn min_literal(&self) -> Literal<'_> {
        match self {
            ParamKind::Str { .. } => Literal::Str(""),
            ParamKind::Bool { min, .. } => Literal::Bool(*min),
            ParamKind::Int { min, .. } => Literal::Int(*min),
            ParamKind::Double { min, .. } => Literal::Double(*min),
        }
    }

    pub fn max_literal(&self) -> Literal<'_> {
        match self {
            ParamKind::Str { .. } => Literal::Str(""),
            ParamKind::Bool { max, .. } => Literal::Bool(*max),
            ParamKind::Int { max, .. } => Literal::Int(*max),
            ParamKind::Double { max, .. } => Literal::Double(*max),
        }
    }
}

/// A validated parameter record. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    kind: ParamKind,
    level: u32,
    description: String,
    edit_method: String,
    source: SourceLocation,
}

impl Parameter {
    /// Validate a declaration and fill in the per-type defaults.
    ///
    /// Omitted values become `""` for strings, `false`/`false`/`true` for
    /// booleans, `0`/`INT_MIN`/`INT_MAX` for ints and `0.0`/`-inf`/`+inf`
    /// for doubles. An integer is accepted where a double is expected;
    /// every other mismatch is a [`ParamError::Type`].
    pub fn new(decl: ParamDecl, source: SourceLocation) -> Result<Self, ParamError> {
        let check = Check {
            name: &decl.name,
            ty: decl.ty,
        };

        let kind = match decl.ty {
            ParamType::Str => {
                if decl.min.is_some() || decl.max.is_some() {
                    return Err(ParamError::BoundsOnString {
                        name: decl.name.clone(),
                    });
                }
                ParamKind::Str {
                    default: check.string("default", decl.default)?.unwrap_or_default(),
                }
            }
            ParamType::Bool => ParamKind::Bool {
                default: check.boolean("default", decl.default)?.unwrap_or(false),
                min: check.boolean("min", decl.min)?.unwrap_or(false),
                max: check.boolean("max", decl.max)?.unwrap_or(true),
            },
            ParamType::Int => ParamKind::Int {
                default: check.int("default", decl.default)?.unwrap_or(0),
                min: check.int("min", decl.min)?.unwrap_or(i32::MIN),
                max: check.int("max", decl.max)?.unwrap_or(i32::MAX),
            },
            ParamType::Double => ParamKind::Double {
                default: check.double("default", decl.default)?.unwrap_or(0.0),
                min: check.double("min", decl.min)?.unwrap_or(f64::NEG_INFINITY),
                max: check.double("max", decl.max)?.unwrap_or(f64::INFINITY),
            },
        };

        Ok(Self {
            name: decl.name,
            kind,
            level: decl.level,
            description: decl.description,
            edit_method: decl.edit_method,
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ParamKind {
        &self.kind
    }

    pub fn param_type(&self) -> ParamType {
        self.kind.param_type()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn edit_method(&self) -> &str {
        &self.edit_method
    }

    pub fn source(&self) -> &SourceLocation {
        &self.source
    }

    /// C++ type of the storage field.
    pub fn ctype(&self) -> &'static str {
        CppTypeMapper.map_param_type(self.param_type())
    }

    pub fn default(&self) -> Literal<'_> {
        self.kind.default_literal()
    }

    pub fn min(&self) -> Literal<'_> {
        self.kind.min_literal()
    }

    pub fn max(&self) -> Literal<'_> {
        self.kind.max_literal()
    }
}

struct Check<'a> {
    name: &'a str,
    ty: ParamType,
}

impl Check<'_> {
    fn mismatch(&self, field: &'static str, value: Value) -> ParamError {
        ParamError::Type {
            name: self.name.to_string(),
            ty: self.ty,
            field,
            value,
        }
    }

    fn string(&self, field: &'static str, value: Option<Value>) -> Result<Option<String>, ParamError> {
        match value {
            None => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(self.mismatch(field, other)),
        }
    }

    fn boolean(&self, field: &'static str, value: Option<Value>) -> Result<Option<bool>, ParamError> {
        match value {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(self.mismatch(field, other)),
        }
    }

    fn int(&self, field: &'static str, value: Option<Value>) -> Result<Option<i32>, ParamError> {
        match value {
            None => Ok(None),
            Some(Value::Int(i)) => i32::try_from(i).map(Some).map_err(|_| ParamError::OutOfRange {
                name: self.name.to_string(),
                field,
                value: i,
            }),
            Some(other) => Err(self.mismatch(field, other)),
        }
    }

    fn double(&self, field: &'static str, value: Option<Value>) -> Result<Option<f64>, ParamError> {
        match value {
            None => Ok(None),
            Some(Value::Double(d)) if !d.is_nan() => Ok(Some(d)),
            Some(Value::Int(i)) => Ok(Some(i as f64)),
            Some(other) => Err(self.mismatch(field, other)),
        }
    }
}
