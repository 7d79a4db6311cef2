//! The closed set of parameter types and the loosely-typed values
//! callers supply before normalization.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Supported parameter types.
///
/// The string tags (`str`, `bool`, `int`, `double`) are what the runtime
/// expects in parameter descriptions, so they appear verbatim in every
/// generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Str,
    Bool,
    Int,
    Double,
}

impl ParamType {
    pub const ALL: [ParamType; 4] = [
        ParamType::Str,
        ParamType::Bool,
        ParamType::Int,
        ParamType::Double,
    ];

    /// Get the type tag used in manifests and generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Str => "str",
            ParamType::Bool => "bool",
            ParamType::Int => "int",
            ParamType::Double => "double",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type tag outside of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter type '{0}'")]
pub struct UnknownParamType(pub String);

impl FromStr for ParamType {
    type Err = UnknownParamType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownParamType(s.to_string()))
    }
}

/// A default or bound as supplied by a caller, before it is checked
/// against the declared [`ParamType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Double(f64),
}

impl Value {
    /// Name of the value's own representation, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Double(_) => "float",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{:?}", d),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}
