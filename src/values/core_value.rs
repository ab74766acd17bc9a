use crate::traits::identity::Identity;
use crate::values::core_values::boolean::Boolean;
use crate::values::core_values::number::Number;
use crate::values::core_values::symbol::Symbol;
use crate::values::core_values::text::Text;
use crate::values::type_tag::TypeTag;
use core::fmt::{Display, Formatter};
use num_bigint::BigInt;

/// A primitive value. Primitives have no identity of their own (except
/// symbols) and are compared by value.
#[derive(Clone, Debug)]
pub enum CoreValue {
    Undefined,
    Null,
    Boolean(Boolean),
    Number(Number),
    Text(Text),
    BigInt(BigInt),
    Symbol(Symbol),
}

/// Strict equality between primitives: same type and same value, with
/// numbers compared by IEEE equality and symbols by identity.
impl Identity for CoreValue {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (CoreValue::Undefined, CoreValue::Undefined) => true,
            (CoreValue::Null, CoreValue::Null) => true,
            (CoreValue::Boolean(a), CoreValue::Boolean(b)) => a == b,
            (CoreValue::Number(a), CoreValue::Number(b)) => a.identical(b),
            (CoreValue::Text(a), CoreValue::Text(b)) => a == b,
            (CoreValue::BigInt(a), CoreValue::BigInt(b)) => a == b,
            (CoreValue::Symbol(a), CoreValue::Symbol(b)) => a.identical(b),
            _ => false,
        }
    }
}

impl CoreValue {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            CoreValue::Undefined => TypeTag::Undefined,
            CoreValue::Null => TypeTag::Null,
            CoreValue::Boolean(_) => TypeTag::Boolean,
            CoreValue::Number(_) => TypeTag::Number,
            CoreValue::Text(_) => TypeTag::String,
            CoreValue::BigInt(_) => TypeTag::BigInt,
            CoreValue::Symbol(_) => TypeTag::Symbol,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            CoreValue::Undefined => "undefined".to_string(),
            CoreValue::Null => "null".to_string(),
            CoreValue::Boolean(boolean) => boolean.as_str().to_string(),
            CoreValue::Number(number) => number.to_text(),
            CoreValue::Text(text) => text.as_string(),
            CoreValue::BigInt(bigint) => bigint.to_string(),
            CoreValue::Symbol(symbol) => symbol.to_string(),
        }
    }
}

impl Display for CoreValue {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            CoreValue::Text(text) => core::write!(f, "{text}"),
            CoreValue::BigInt(bigint) => core::write!(f, "{bigint}n"),
            other => core::write!(f, "{}", other.to_text()),
        }
    }
}

impl From<bool> for CoreValue {
    fn from(value: bool) -> Self {
        CoreValue::Boolean(Boolean(value))
    }
}

impl From<Boolean> for CoreValue {
    fn from(value: Boolean) -> Self {
        CoreValue::Boolean(value)
    }
}

impl From<Number> for CoreValue {
    fn from(value: Number) -> Self {
        CoreValue::Number(value)
    }
}

impl From<&str> for CoreValue {
    fn from(value: &str) -> Self {
        CoreValue::Text(value.into())
    }
}

impl From<String> for CoreValue {
    fn from(value: String) -> Self {
        CoreValue::Text(Text(value))
    }
}

impl From<Text> for CoreValue {
    fn from(value: Text) -> Self {
        CoreValue::Text(value)
    }
}

impl From<BigInt> for CoreValue {
    fn from(value: BigInt) -> Self {
        CoreValue::BigInt(value)
    }
}

impl From<Symbol> for CoreValue {
    fn from(value: Symbol) -> Self {
        CoreValue::Symbol(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CoreValue {
                fn from(value: $t) -> Self {
                    CoreValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);
