//! Deep structural equality over runtime values.
//!
//! [`is_equal`] classifies both values by their type tag and applies the
//! rule of the matching category, recursing into elements and properties.
//! Self-referential values are not detected and recurse until the stack is
//! exhausted.

pub mod callable;
pub mod probes;

use crate::traits::identity::Identity;
use crate::traits::value_eq::ValueEq;
use crate::values::core_values::object::Properties;
use crate::values::object_kind::ObjectKind;
use crate::values::reference::Reference;
use crate::values::type_tag::ValueCategory;
use crate::values::value_container::ValueContainer;
use callable::normalize_body_delimiter;
use log::trace;

/// Returns true if `value` and `other` are deeply equal.
///
/// Rules, in order:
/// 1. strictly equal values are equal
/// 2. booleans and numbers compare by value across primitive and boxed
///    forms, NaN is equal to NaN
/// 3. values with different type tags are unequal
/// 4. strings compare by text, dates by epoch value, regular expressions by
///    their `/source/flags` text
/// 5. arrays, functions and plain objects compare structurally
/// 6. everything else is unequal
pub fn is_equal(value: &ValueContainer, other: &ValueContainer) -> bool {
    if value.identical(other) {
        return true;
    }

    // boxed and primitive booleans/numbers are compared before the type tags
    let value_bool = probes::as_boolean(value);
    let other_bool = probes::as_boolean(other);
    if value_bool.is_some() || other_bool.is_some() {
        return value_bool.is_some() && value_bool == other_bool;
    }

    let value_number = probes::as_number(value);
    let other_number = probes::as_number(other);
    if value_number.is_some() || other_number.is_some() {
        return match (value_number, other_number) {
            (Some(a), Some(b)) => a.value_eq(&b),
            _ => false,
        };
    }

    let tag = value.type_tag();
    let other_tag = other.type_tag();
    if tag != other_tag {
        trace!("type tags differ: {tag} vs {other_tag}");
        return false;
    }

    match tag.category() {
        // decided by the probes above
        ValueCategory::Boolean | ValueCategory::Number => false,
        ValueCategory::Text => value.to_text() == other.to_text(),
        ValueCategory::Temporal => {
            match (probes::as_date(value), probes::as_date(other)) {
                // invalid dates hold NaN and never match
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        ValueCategory::Pattern => {
            match (probes::as_regexp(value), probes::as_regexp(other)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        ValueCategory::Sequence => with_references(value, other, arrays_equal),
        ValueCategory::Callable => callables_equal(value, other),
        ValueCategory::Composite => {
            with_references(value, other, plain_objects_equal)
        }
        ValueCategory::Other => false,
    }
}

fn with_references(
    value: &ValueContainer,
    other: &ValueContainer,
    compare: impl FnOnce(&Reference, &Reference) -> bool,
) -> bool {
    match (value.maybe_reference(), other.maybe_reference()) {
        (Some(value), Some(other)) => compare(value, other),
        _ => false,
    }
}

/// Arrays must have the same length and join to the same text. Elements are
/// then compared from the last index down to index 1; the element at index 0
/// is only covered by the joined text.
fn arrays_equal(value: &Reference, other: &Reference) -> bool {
    let value_data = value.borrow();
    let other_data = other.borrow();
    let (ObjectKind::Array(array), ObjectKind::Array(other_array)) =
        (&value_data.kind, &other_data.kind)
    else {
        return false;
    };

    if array.len() != other_array.len() {
        trace!("array lengths differ: {} vs {}", array.len(), other_array.len());
        return false;
    }
    if array.to_text() != other_array.to_text() {
        return false;
    }

    let mut index = array.len();
    while index > 1 {
        index -= 1;
        match (array.get(index), other_array.get(index)) {
            (Some(element), Some(other_element))
                if is_equal(element, other_element) => {}
            _ => {
                trace!("array elements at index {index} differ");
                return false;
            }
        }
    }
    true
}

/// Functions must agree on name, parameter count, and on being generators
/// or arrows. Their sources must match exactly, except that ordinary
/// functions may differ in the whitespace before the body's opening brace.
fn callables_equal(value: &ValueContainer, other: &ValueContainer) -> bool {
    let (Some(function), Some(other_function)) = (
        function_signature(value),
        function_signature(other),
    ) else {
        return false;
    };

    if !is_equal(&function.0, &other_function.0) {
        return false;
    }
    if !is_equal(&function.1, &other_function.1) {
        return false;
    }

    let is_generator = probes::is_generator_function(value);
    if is_generator != probes::is_generator_function(other) {
        return false;
    }
    let is_arrow = probes::is_arrow_function(value);
    if is_arrow != probes::is_arrow_function(other) {
        return false;
    }

    let source = value.to_text();
    let other_source = other.to_text();
    if is_equal(
        &ValueContainer::from(source.as_str()),
        &ValueContainer::from(other_source.as_str()),
    ) {
        return true;
    }
    if is_generator || is_arrow {
        return false;
    }
    is_equal(
        &ValueContainer::from(&*normalize_body_delimiter(&source)),
        &ValueContainer::from(&*normalize_body_delimiter(&other_source)),
    )
}

/// The `name` and `length` of a function object.
fn function_signature(
    value: &ValueContainer,
) -> Option<(ValueContainer, ValueContainer)> {
    value.maybe_reference()?.with_kind(|kind| match kind {
        ObjectKind::Function(function) => Some((
            ValueContainer::from(function.name()),
            ValueContainer::from(function.length),
        )),
        _ => None,
    })
}

/// Plain objects must not inherit from each other, must share their
/// prototype, and must have the same own enumerable keys with deeply equal
/// values. Key order is irrelevant.
fn plain_objects_equal(value: &Reference, other: &Reference) -> bool {
    if value.is_prototype_of(other) || other.is_prototype_of(value) {
        trace!("one object inherits from the other");
        return false;
    }

    let value_data = value.borrow();
    let other_data = other.borrow();
    let same_prototype = match (&value_data.prototype, &other_data.prototype) {
        (Some(prototype), Some(other_prototype)) => {
            prototype.identical(other_prototype)
        }
        (None, None) => true,
        _ => false,
    };
    if !same_prototype {
        trace!("objects have different prototypes");
        return false;
    }

    let properties = &value_data.properties;
    let other_properties = &other_data.properties;
    covers(properties, other_properties) && covers(other_properties, properties)
}

/// Every own enumerable key of `from` is an own enumerable key of `to` with
/// a deeply equal value.
fn covers(from: &Properties, to: &Properties) -> bool {
    from.enumerable().all(|(key, property)| match to.get_enumerable(key) {
        Some(other_property) => is_equal(property, other_property),
        None => {
            trace!("key {key:?} is missing on one side");
            false
        }
    })
}
