use crate::equality::is_equal;
use crate::traits::identity::Identity;
use crate::traits::structural_eq::StructuralEq;
use crate::values::core_value::CoreValue;
use crate::values::reference::Reference;
use crate::values::type_tag::TypeTag;
use core::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Invalid regular expression flag '{0}'")]
    InvalidRegExpFlag(char),
    #[error("Duplicate regular expression flag '{0}'")]
    DuplicateRegExpFlag(char),
    #[error("Regular expression flags '{0}' and '{1}' cannot be combined")]
    IncompatibleRegExpFlags(char, char),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Cyclic prototype chain")]
    CyclicPrototype,
    #[error("Value is not an array")]
    NotAnArray,
    #[error("Array index {0} is out of range")]
    InvalidArrayIndex(usize),
}

/// Any runtime value: a primitive held by value, or a heap object held by
/// reference.
#[derive(Clone, Debug)]
pub enum ValueContainer {
    Value(CoreValue),
    Reference(Reference),
}

/// Partial equality for ValueContainer is strict equality:
/// identical references, or primitives of the same type and value.
/// NaN is therefore not equal to itself.
impl PartialEq for ValueContainer {
    fn eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

/// Identity holds for the same reference, and for primitives that are
/// strictly equal. A primitive is never identical to a reference.
impl Identity for ValueContainer {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (ValueContainer::Value(a), ValueContainer::Value(b)) => {
                a.identical(b)
            }
            (ValueContainer::Reference(a), ValueContainer::Reference(b)) => {
                a.identical(b)
            }
            _ => false,
        }
    }
}

/// Structural equality compares boxed primitives by value, containers
/// recursively and functions by their source text.
impl StructuralEq for ValueContainer {
    fn structural_eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}

impl Display for ValueContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueContainer::Value(value) => core::write!(f, "{value}"),
            ValueContainer::Reference(reference) => {
                core::write!(f, "{}", reference.to_text())
            }
        }
    }
}

impl ValueContainer {
    pub fn undefined() -> Self {
        ValueContainer::Value(CoreValue::Undefined)
    }

    pub fn null() -> Self {
        ValueContainer::Value(CoreValue::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, ValueContainer::Value(CoreValue::Undefined))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ValueContainer::Value(CoreValue::Null))
    }

    /// True for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        self.is_null() || self.is_undefined()
    }

    /// Returns the contained Reference if it is a Reference, otherwise returns None.
    pub fn maybe_reference(&self) -> Option<&Reference> {
        if let ValueContainer::Reference(reference) = self {
            Some(reference)
        } else {
            None
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            ValueContainer::Value(value) => value.type_tag(),
            ValueContainer::Reference(reference) => reference.type_tag(),
        }
    }

    /// Text coercion, as used by string conversion and array joins.
    pub fn to_text(&self) -> String {
        match self {
            ValueContainer::Value(value) => value.to_text(),
            ValueContainer::Reference(reference) => reference.to_text(),
        }
    }
}

impl<T: Into<CoreValue>> From<T> for ValueContainer {
    fn from(value: T) -> Self {
        ValueContainer::Value(value.into())
    }
}

impl From<Reference> for ValueContainer {
    fn from(reference: Reference) -> Self {
        ValueContainer::Reference(reference)
    }
}

impl From<&Reference> for ValueContainer {
    fn from(reference: &Reference) -> Self {
        ValueContainer::Reference(reference.clone())
    }
}
