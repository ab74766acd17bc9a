use crate::values::value_container::{ValueContainer, ValueError};
use itertools::Itertools;

/// Array indices are below `2^32 - 1`, the largest possible array length.
pub const MAX_ARRAY_LENGTH: usize = u32::MAX as usize;

/// The element storage of an array object. A `None` slot is a hole: the
/// index is inside the array's length but the array has no own element there.
#[derive(Clone, Debug, Default)]
pub struct Array(Vec<Option<ValueContainer>>);

impl Array {
    pub fn new(elements: Vec<ValueContainer>) -> Self {
        Array(elements.into_iter().map(Some).collect())
    }

    /// Creates an array from slots, where `None` marks a hole.
    pub fn from_slots(slots: Vec<Option<ValueContainer>>) -> Self {
        Array(slots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the own element at `index`, or `None` for holes and indices
    /// past the end.
    pub fn get(&self, index: usize) -> Option<&ValueContainer> {
        self.0.get(index).and_then(Option::as_ref)
    }

    pub fn has_own(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Sets the element at `index`, growing the array with holes if needed.
    /// Fails for indices at or above [`MAX_ARRAY_LENGTH`].
    pub fn set(
        &mut self,
        index: usize,
        value: ValueContainer,
    ) -> Result<(), ValueError> {
        let length = index
            .checked_add(1)
            .filter(|length| *length <= MAX_ARRAY_LENGTH)
            .ok_or(ValueError::InvalidArrayIndex(index))?;
        if length > self.0.len() {
            self.0.resize(length, None);
        }
        self.0[index] = Some(value);
        Ok(())
    }

    /// Turns the slot at `index` into a hole without changing the length.
    pub fn delete(&mut self, index: usize) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = None;
        }
    }

    pub fn push(&mut self, value: ValueContainer) {
        self.0.push(Some(value));
    }

    pub fn slots(&self) -> impl Iterator<Item = Option<&ValueContainer>> {
        self.0.iter().map(Option::as_ref)
    }

    /// Joins the elements with `,`. Holes, `null` and `undefined` render as
    /// empty text.
    pub fn to_text(&self) -> String {
        self.slots()
            .map(|slot| match slot {
                Some(value) if !value.is_nullish() => value.to_text(),
                _ => String::new(),
            })
            .join(",")
    }
}

impl<T: Into<ValueContainer>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().map(|value| Some(value.into())).collect())
    }
}
