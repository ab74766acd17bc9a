use crate::values::core_values::array::Array;
use crate::values::core_values::boolean::Boolean;
use crate::values::core_values::date::Date;
use crate::values::core_values::exotic::ExoticKind;
use crate::values::core_values::function::{Function, FunctionKind};
use crate::values::core_values::number::Number;
use crate::values::core_values::regexp::RegExp;
use crate::values::core_values::text::Text;
use crate::values::object_kind::ObjectKind;
use crate::values::reference::Reference;
use crate::values::value_container::{ValueContainer, ValueError};
use std::collections::HashMap;
use strum::IntoEnumIterator;

thread_local! {
    static CORE_REALM: Realm = Realm::new();
}

/// Runs a closure with the default realm of the current thread.
pub fn with_core_realm<R, F: FnOnce(&Realm) -> R>(f: F) -> R {
    CORE_REALM.with(f)
}

/// Owns the intrinsic prototype objects. Values created through the same
/// realm share prototypes, so two plain objects built here have the same
/// prototype link.
pub struct Realm {
    object_prototype: Reference,
    function_prototype: Reference,
    generator_function_prototype: Reference,
    array_prototype: Reference,
    boolean_prototype: Reference,
    number_prototype: Reference,
    string_prototype: Reference,
    date_prototype: Reference,
    regexp_prototype: Reference,
    exotic_prototypes: HashMap<ExoticKind, Reference>,
}

impl Default for Realm {
    fn default() -> Self {
        Realm::new()
    }
}

impl Realm {
    pub fn new() -> Self {
        let object_prototype = Reference::new(ObjectKind::Ordinary, None);
        let derived = |kind: ObjectKind| {
            Reference::new(kind, Some(object_prototype.clone()))
        };

        let function_prototype = derived(ObjectKind::Function(Function::new(
            FunctionKind::Function,
            "",
            0,
            "function () { [native code] }",
        )));
        let generator_function_prototype = Reference::new(
            ObjectKind::Ordinary,
            Some(function_prototype.clone()),
        );
        let array_prototype = derived(ObjectKind::Array(Array::default()));
        let boolean_prototype = derived(ObjectKind::Boolean(Boolean(false)));
        let number_prototype = derived(ObjectKind::Number(Number(0.0)));
        let string_prototype = derived(ObjectKind::String(Text::default()));
        let date_prototype = derived(ObjectKind::Ordinary);
        let regexp_prototype = derived(ObjectKind::Ordinary);
        let exotic_prototypes = ExoticKind::iter()
            .map(|kind| (kind, derived(ObjectKind::Ordinary)))
            .collect();

        Realm {
            object_prototype,
            function_prototype,
            generator_function_prototype,
            array_prototype,
            boolean_prototype,
            number_prototype,
            string_prototype,
            date_prototype,
            regexp_prototype,
            exotic_prototypes,
        }
    }

    pub fn object_prototype(&self) -> &Reference {
        &self.object_prototype
    }

    pub fn function_prototype(&self) -> &Reference {
        &self.function_prototype
    }

    pub fn array_prototype(&self) -> &Reference {
        &self.array_prototype
    }

    /// Creates an empty plain object inheriting from `Object.prototype`.
    pub fn new_object(&self) -> Reference {
        self.new_object_with_prototype(Some(self.object_prototype.clone()))
    }

    /// Creates an empty plain object with the given prototype, or without
    /// any prototype for `None`.
    pub fn new_object_with_prototype(
        &self,
        prototype: Option<Reference>,
    ) -> Reference {
        Reference::new(ObjectKind::Ordinary, prototype)
    }

    /// Creates an instance of a class, given the class's `prototype` object.
    pub fn new_instance(&self, prototype: &Reference) -> Reference {
        self.new_object_with_prototype(Some(prototype.clone()))
    }

    pub fn new_array(&self, elements: Vec<ValueContainer>) -> Reference {
        Reference::new(
            ObjectKind::Array(Array::new(elements)),
            Some(self.array_prototype.clone()),
        )
    }

    /// Creates an array from slots, where `None` marks a hole.
    pub fn new_sparse_array(
        &self,
        slots: Vec<Option<ValueContainer>>,
    ) -> Reference {
        Reference::new(
            ObjectKind::Array(Array::from_slots(slots)),
            Some(self.array_prototype.clone()),
        )
    }

    pub fn new_boolean_object(&self, value: bool) -> Reference {
        Reference::new(
            ObjectKind::Boolean(Boolean(value)),
            Some(self.boolean_prototype.clone()),
        )
    }

    pub fn new_number_object<N: Into<Number>>(&self, value: N) -> Reference {
        Reference::new(
            ObjectKind::Number(value.into()),
            Some(self.number_prototype.clone()),
        )
    }

    pub fn new_string_object(&self, value: &str) -> Reference {
        Reference::new(
            ObjectKind::String(Text::from(value)),
            Some(self.string_prototype.clone()),
        )
    }

    pub fn new_date(&self, date: Date) -> Reference {
        Reference::new(ObjectKind::Date(date), Some(self.date_prototype.clone()))
    }

    pub fn new_regexp(
        &self,
        source: &str,
        flags: &str,
    ) -> Result<Reference, ValueError> {
        let regexp = Reference::new(
            ObjectKind::RegExp(RegExp::new(source, flags)?),
            Some(self.regexp_prototype.clone()),
        );
        regexp.define_property("lastIndex", 0, false);
        Ok(regexp)
    }

    /// Creates a function object. Ordinary functions and classes get an own,
    /// non-enumerable `prototype` object.
    pub fn new_function(&self, function: Function) -> Reference {
        let prototype = if function.kind.is_generator() {
            self.generator_function_prototype.clone()
        } else {
            self.function_prototype.clone()
        };
        let is_constructor = function.kind.is_constructor();
        let reference =
            Reference::new(ObjectKind::Function(function), Some(prototype));
        if is_constructor {
            reference.define_property("prototype", self.new_object(), false);
        }
        reference
    }

    /// Creates a class constructor and returns it together with the
    /// `prototype` object its instances inherit from. `length` is the
    /// parameter count of the class's constructor.
    pub fn new_class(
        &self,
        name: &str,
        length: u32,
        source: &str,
    ) -> (Reference, Reference) {
        let prototype = self.new_object();
        let class = Reference::new(
            ObjectKind::Function(Function::new(
                FunctionKind::Class,
                name,
                length,
                source,
            )),
            Some(self.function_prototype.clone()),
        );
        class.define_property("prototype", &prototype, false);
        (class, prototype)
    }

    pub fn new_exotic(&self, kind: ExoticKind) -> Reference {
        let prototype = self
            .exotic_prototypes
            .get(&kind)
            .unwrap_or(&self.object_prototype)
            .clone();
        Reference::new(ObjectKind::Exotic(kind), Some(prototype))
    }

    /// Builds a value from JSON. Objects and arrays become plain objects and
    /// arrays of this realm.
    pub fn value_from_json(&self, json: &serde_json::Value) -> ValueContainer {
        match json {
            serde_json::Value::Null => ValueContainer::null(),
            serde_json::Value::Bool(value) => ValueContainer::from(*value),
            serde_json::Value::Number(number) => {
                ValueContainer::from(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => {
                ValueContainer::from(text.as_str())
            }
            serde_json::Value::Array(items) => self
                .new_array(
                    items.iter().map(|item| self.value_from_json(item)).collect(),
                )
                .into(),
            serde_json::Value::Object(entries) => {
                let object = self.new_object();
                for (key, value) in entries {
                    object.set_property(key.as_str(), self.value_from_json(value));
                }
                object.into()
            }
        }
    }
}
