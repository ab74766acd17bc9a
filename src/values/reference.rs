use crate::traits::identity::Identity;
use crate::values::core_values::object::Properties;
use crate::values::object_kind::ObjectKind;
use crate::values::type_tag::TypeTag;
use crate::values::value_container::{ValueContainer, ValueError};
use core::fmt::{Debug, Formatter};
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// A shared handle to a heap object. Clones of a reference point to the same
/// object and are identical to each other.
#[derive(Clone)]
pub struct Reference(Rc<RefCell<ReferenceData>>);

/// Two references are identical if they point to the same data
impl Identity for Reference {
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Reference {}

/// PartialEq corresponds to pointer equality / identity for `Reference`.
impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let ptr = Rc::as_ptr(&self.0);
        ptr.hash(state);
    }
}

// Implement Deref to allow access to ReferenceData directly
impl Deref for Reference {
    type Target = RefCell<ReferenceData>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Prints the kind and the enumerable properties. Prototypes and
/// non-enumerable properties are left out, which keeps intrinsic back links
/// out of the output.
impl Debug for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let data = self.borrow();
        let mut debug = f.debug_struct("Reference");
        debug.field("kind", &data.kind);
        for (key, value) in data.properties.enumerable() {
            debug.field(key, value);
        }
        debug.finish()
    }
}

impl Reference {
    pub fn new(kind: ObjectKind, prototype: Option<Reference>) -> Self {
        Reference(Rc::new(RefCell::new(ReferenceData {
            kind,
            prototype,
            properties: Properties::new(),
        })))
    }

    pub fn type_tag(&self) -> TypeTag {
        self.borrow().kind.type_tag()
    }

    pub fn to_text(&self) -> String {
        self.borrow().kind.to_text()
    }

    /// Runs a closure with the internal representation of this object.
    pub fn with_kind<R, F: FnOnce(&ObjectKind) -> R>(&self, f: F) -> R {
        f(&self.borrow().kind)
    }

    pub fn prototype(&self) -> Option<Reference> {
        self.borrow().prototype.clone()
    }

    /// Replaces the prototype link. Fails if the new prototype chain would
    /// lead back to this object.
    pub fn set_prototype(
        &self,
        prototype: Option<Reference>,
    ) -> Result<(), ValueError> {
        if let Some(prototype) = &prototype
            && (prototype.identical(self) || self.is_prototype_of(prototype))
        {
            return Err(ValueError::CyclicPrototype);
        }
        self.borrow_mut().prototype = prototype;
        Ok(())
    }

    /// Returns true if this object appears anywhere on the prototype chain
    /// of `other`.
    pub fn is_prototype_of(&self, other: &Reference) -> bool {
        let mut current = other.prototype();
        while let Some(prototype) = current {
            if prototype.identical(self) {
                return true;
            }
            current = prototype.prototype();
        }
        false
    }

    /// Sets an enumerable own property.
    pub fn set_property<K: Into<String>, V: Into<ValueContainer>>(
        &self,
        key: K,
        value: V,
    ) {
        self.borrow_mut().properties.set(key, value);
    }

    pub fn define_property<K: Into<String>, V: Into<ValueContainer>>(
        &self,
        key: K,
        value: V,
        enumerable: bool,
    ) {
        self.borrow_mut().properties.define(key, value, enumerable);
    }

    /// Returns a clone of the own property `key`, if present.
    pub fn get_property(&self, key: &str) -> Option<ValueContainer> {
        self.borrow().properties.get(key).cloned()
    }

    pub fn delete_property(&self, key: &str) -> bool {
        self.borrow_mut().properties.remove(key).is_some()
    }

    /// Sets an array element, growing the array with holes if needed.
    pub fn try_set_element<V: Into<ValueContainer>>(
        &self,
        index: usize,
        value: V,
    ) -> Result<(), ValueError> {
        match &mut self.borrow_mut().kind {
            ObjectKind::Array(array) => array.set(index, value.into()),
            _ => Err(ValueError::NotAnArray),
        }
    }

    pub fn try_push_element<V: Into<ValueContainer>>(
        &self,
        value: V,
    ) -> Result<(), ValueError> {
        match &mut self.borrow_mut().kind {
            ObjectKind::Array(array) => {
                array.push(value.into());
                Ok(())
            }
            _ => Err(ValueError::NotAnArray),
        }
    }

    /// Turns an array element into a hole.
    pub fn try_delete_element(&self, index: usize) -> Result<(), ValueError> {
        match &mut self.borrow_mut().kind {
            ObjectKind::Array(array) => {
                array.delete(index);
                Ok(())
            }
            _ => Err(ValueError::NotAnArray),
        }
    }
}

pub struct ReferenceData {
    /// internal representation (plain object, boxed primitive, array, ...)
    pub(crate) kind: ObjectKind,
    /// the object this one inherits from, `None` for null-prototype objects
    pub(crate) prototype: Option<Reference>,
    /// own properties
    pub(crate) properties: Properties,
}
