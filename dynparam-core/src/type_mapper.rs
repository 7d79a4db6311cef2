//! Type mapping between parameter types and language-specific types.

use crate::types::ParamType;

/// Trait for mapping parameter types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a parameter type to the type used for its storage field
    fn map_param_type(&self, param_type: ParamType) -> &'static str;
}

/// C++ type mapper used for the generated configuration header
pub struct CppTypeMapper;

impl TypeMapper for CppTypeMapper {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn map_param_type(&self, param_type: ParamType) -> &'static str {
        match param_type {
            ParamType::Str => "std::string",
            ParamType::Bool => "bool",
            ParamType::Int => "int",
            ParamType::Double => "double",
        }
    }
}
