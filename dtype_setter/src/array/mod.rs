//! Array-like write targets.
//!
//! A target exposes one of two write paths:
//!
//! - direct index assignment (`target[i] = value`), as on `Vec`, slices and
//!   fixed-size arrays
//! - the accessor protocol (`get(index)` / `set(value, index)`), as on
//!   [`ComplexArray`] and [`AccessorVec`]
//!
//! [`ArrayLike::capability`] reports which path a concrete target offers so
//! the generic setter can pick one per call.

mod accessor_vec;
mod complex;

use std::fmt;

pub use accessor_vec::AccessorVec;
pub use complex::{Complex128Array, Complex64Array, ComplexArray};

/// Accessor protocol: explicit element read and write methods.
///
/// Implementations decide what an out-of-range index does. Callers in this
/// crate never check bounds before calling `set`.
pub trait Accessor<T> {
    /// Read the element at `index`
    fn get(&self, index: usize) -> T;

    /// Write `value` at `index`
    fn set(&mut self, value: T, index: usize);
}

/// Write path offered by an array-like target
pub enum Capability<'a, T> {
    /// Direct index assignment into contiguous storage
    Indexed(&'a mut [T]),
    /// Accessor protocol
    Accessor(&'a mut dyn Accessor<T>),
}

impl<T> Capability<'_, T> {
    /// Check if this target uses the accessor protocol
    pub fn is_accessor(&self) -> bool {
        matches!(self, Capability::Accessor(_))
    }
}

impl<T> fmt::Debug for Capability<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Indexed(_) => f.write_str("Indexed"),
            Capability::Accessor(_) => f.write_str("Accessor"),
        }
    }
}

/// Anything a setter can write elements of type `T` into.
pub trait ArrayLike<T> {
    fn capability(&mut self) -> Capability<'_, T>;
}

impl<T> ArrayLike<T> for Vec<T> {
    #[inline]
    fn capability(&mut self) -> Capability<'_, T> {
        Capability::Indexed(self.as_mut_slice())
    }
}

impl<T> ArrayLike<T> for [T] {
    #[inline]
    fn capability(&mut self) -> Capability<'_, T> {
        Capability::Indexed(self)
    }
}

impl<T, const N: usize> ArrayLike<T> for [T; N] {
    #[inline]
    fn capability(&mut self) -> Capability<'_, T> {
        Capability::Indexed(self)
    }
}

/// Borrowed targets, so `&mut buf[a..b]` can be handed to a setter.
impl<T, A: ArrayLike<T> + ?Sized> ArrayLike<T> for &mut A {
    #[inline]
    fn capability(&mut self) -> Capability<'_, T> {
        (**self).capability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_containers_are_indexed() {
        let mut v = vec![1, 2, 3];
        assert!(!v.capability().is_accessor());

        let mut a = [1.0_f32; 4];
        assert!(!a.capability().is_accessor());

        let s: &mut [u8] = &mut [0, 1];
        assert!(!s.capability().is_accessor());
    }

    #[test]
    fn test_accessor_arrays_report_accessor() {
        let mut arr = AccessorVec::from(vec![1, 2]);
        assert!(arr.capability().is_accessor());

        let mut z = Complex128Array::zeros(1);
        assert!(z.capability().is_accessor());
    }

    #[test]
    fn test_capability_debug() {
        let mut v = vec![0_i64];
        assert_eq!(format!("{:?}", v.capability()), "Indexed");
        let mut arr = AccessorVec::from(vec![0_i64]);
        assert_eq!(format!("{:?}", arr.capability()), "Accessor");
    }

    #[test]
    fn test_indexed_capability_writes_through() {
        let mut v = vec![1, 2, 3];
        if let Capability::Indexed(target) = v.capability() {
            target[1] = 20;
        }
        assert_eq!(v, vec![1, 20, 3]);
    }

    #[test]
    fn test_borrowed_targets_forward_capability() {
        let mut buf = [0_i8; 4];
        let mut s: &mut [i8] = &mut buf[1..];
        assert!(!<&mut [i8] as ArrayLike<i8>>::capability(&mut s).is_accessor());

        let mut arr = AccessorVec::from(vec![1, 2]);
        let mut borrowed = &mut arr;
        assert!(<&mut AccessorVec<i32> as ArrayLike<i32>>::capability(&mut borrowed).is_accessor());
    }
}
