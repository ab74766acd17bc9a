use crate::values::value_container::ValueContainer;
use indexmap::IndexMap;

/// A single own property.
#[derive(Clone, Debug)]
pub struct Property {
    pub value: ValueContainer,
    pub enumerable: bool,
}

/// The own properties of an object, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Properties(IndexMap<String, Property>);

impl Properties {
    pub fn new() -> Self {
        Properties::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets an enumerable property, keeping the position of an existing key.
    pub fn set<K: Into<String>, V: Into<ValueContainer>>(
        &mut self,
        key: K,
        value: V,
    ) {
        self.define(key, value, true);
    }

    pub fn define<K: Into<String>, V: Into<ValueContainer>>(
        &mut self,
        key: K,
        value: V,
        enumerable: bool,
    ) {
        self.0.insert(
            key.into(),
            Property {
                value: value.into(),
                enumerable,
            },
        );
    }

    pub fn remove(&mut self, key: &str) -> Option<Property> {
        self.0.shift_remove(key)
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ValueContainer> {
        self.0.get(key).map(|property| &property.value)
    }

    pub fn get_enumerable(&self, key: &str) -> Option<&ValueContainer> {
        self.0
            .get(key)
            .filter(|property| property.enumerable)
            .map(|property| &property.value)
    }

    pub fn enumerable(
        &self,
    ) -> impl Iterator<Item = (&str, &ValueContainer)> {
        self.0
            .iter()
            .filter(|(_, property)| property.enumerable)
            .map(|(key, property)| (key.as_str(), &property.value))
    }
}
