//! Growable accessor-protocol array.

use super::{Accessor, ArrayLike, Capability};

/// `Vec`-backed array written through the accessor protocol.
///
/// Writing past the end grows the array, filling the gap with
/// `T::default()`. Reading past the end returns `T::default()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessorVec<T> {
    items: Vec<T>,
}

impl<T> AccessorVec<T> {
    pub fn new() -> Self {
        AccessorVec { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for AccessorVec<T> {
    fn from(items: Vec<T>) -> Self {
        AccessorVec { items }
    }
}

impl<T> FromIterator<T> for AccessorVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AccessorVec {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone + Default> Accessor<T> for AccessorVec<T> {
    fn get(&self, index: usize) -> T {
        self.items.get(index).cloned().unwrap_or_default()
    }

    fn set(&mut self, value: T, index: usize) {
        if index >= self.items.len() {
            self.items.resize_with(index + 1, T::default);
        }
        self.items[index] = value;
    }
}

impl<T: Clone + Default> ArrayLike<T> for AccessorVec<T> {
    #[inline]
    fn capability(&mut self) -> Capability<'_, T> {
        Capability::Accessor(self)
    }
}
