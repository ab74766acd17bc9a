use crate::values::core_values::exotic::ExoticKind;
use core::fmt::Display;

/// The coarse runtime type of a value, as reported by
/// `Object.prototype.toString` in a dynamic runtime. Primitive booleans,
/// numbers and strings share the tag of their boxed wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    BigInt,
    Date,
    RegExp,
    Array,
    Function,
    GeneratorFunction,
    AsyncFunction,
    AsyncGeneratorFunction,
    Object,
    Exotic(ExoticKind),
}

/// The comparison rule a type tag selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Boolean,
    Number,
    Text,
    Temporal,
    Pattern,
    Sequence,
    Callable,
    Composite,
    Other,
}

impl TypeTag {
    pub fn category(&self) -> ValueCategory {
        match self {
            TypeTag::Boolean => ValueCategory::Boolean,
            TypeTag::Number => ValueCategory::Number,
            TypeTag::String => ValueCategory::Text,
            TypeTag::Date => ValueCategory::Temporal,
            TypeTag::RegExp => ValueCategory::Pattern,
            TypeTag::Array => ValueCategory::Sequence,
            TypeTag::Function | TypeTag::GeneratorFunction => {
                ValueCategory::Callable
            }
            TypeTag::Object => ValueCategory::Composite,
            TypeTag::Undefined
            | TypeTag::Null
            | TypeTag::Symbol
            | TypeTag::BigInt
            | TypeTag::AsyncFunction
            | TypeTag::AsyncGeneratorFunction
            | TypeTag::Exotic(_) => ValueCategory::Other,
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let name = match self {
            TypeTag::Undefined => "Undefined",
            TypeTag::Null => "Null",
            TypeTag::Boolean => "Boolean",
            TypeTag::Number => "Number",
            TypeTag::String => "String",
            TypeTag::Symbol => "Symbol",
            TypeTag::BigInt => "BigInt",
            TypeTag::Date => "Date",
            TypeTag::RegExp => "RegExp",
            TypeTag::Array => "Array",
            TypeTag::Function => "Function",
            TypeTag::GeneratorFunction => "GeneratorFunction",
            TypeTag::AsyncFunction => "AsyncFunction",
            TypeTag::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            TypeTag::Object => "Object",
            TypeTag::Exotic(kind) => {
                return core::write!(f, "[object {kind}]");
            }
        };
        core::write!(f, "[object {name}]")
    }
}
