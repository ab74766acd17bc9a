//! Capability probes used by the equality rules. Each probe inspects a value
//! without side effects and reports whether it belongs to a category.

use crate::values::core_value::CoreValue;
use crate::values::core_values::function::Function;
use crate::values::core_values::number::Number;
use crate::values::object_kind::ObjectKind;
use crate::values::value_container::ValueContainer;

/// Returns the boolean held by a primitive boolean or a boxed boolean.
pub fn as_boolean(value: &ValueContainer) -> Option<bool> {
    match value {
        ValueContainer::Value(CoreValue::Boolean(boolean)) => {
            Some(boolean.as_bool())
        }
        ValueContainer::Reference(reference) => {
            reference.with_kind(|kind| match kind {
                ObjectKind::Boolean(boolean) => Some(boolean.as_bool()),
                _ => None,
            })
        }
        ValueContainer::Value(_) => None,
    }
}

/// Returns the numeric value of a primitive number or a boxed number.
pub fn as_number(value: &ValueContainer) -> Option<Number> {
    match value {
        ValueContainer::Value(CoreValue::Number(number)) => Some(*number),
        ValueContainer::Reference(reference) => {
            reference.with_kind(|kind| match kind {
                ObjectKind::Number(number) => Some(*number),
                _ => None,
            })
        }
        ValueContainer::Value(_) => None,
    }
}

/// Returns the epoch milliseconds of a date object.
pub fn as_date(value: &ValueContainer) -> Option<f64> {
    value.maybe_reference()?.with_kind(|kind| match kind {
        ObjectKind::Date(date) => Some(date.epoch_millis()),
        _ => None,
    })
}

/// Returns the `/source/flags` text of a regular expression object.
pub fn as_regexp(value: &ValueContainer) -> Option<String> {
    value.maybe_reference()?.with_kind(|kind| match kind {
        ObjectKind::RegExp(regexp) => Some(regexp.to_text()),
        _ => None,
    })
}

pub fn is_generator_function(value: &ValueContainer) -> bool {
    is_function_where(value, |function| function.kind.is_generator())
}

pub fn is_arrow_function(value: &ValueContainer) -> bool {
    is_function_where(value, |function| function.kind.is_arrow())
}

fn is_function_where(
    value: &ValueContainer,
    predicate: impl FnOnce(&Function) -> bool,
) -> bool {
    value.maybe_reference().is_some_and(|reference| {
        reference.with_kind(|kind| match kind {
            ObjectKind::Function(function) => predicate(function),
            _ => false,
        })
    })
}
