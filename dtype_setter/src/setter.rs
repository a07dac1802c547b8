//! Data type dispatching element setters.
//!
//! [`setter`] maps a data type tag to one of three write routines, once.
//! The caller then writes as many elements as it likes through the returned
//! function pointer without branching on the tag again:
//!
//! ```
//! use dtype_setter::prelude::*;
//!
//! let mut arr = Complex128Array::zeros(4);
//! if let Setter::Complex128(set) = setter::<f64>("complex128") {
//!     for i in 0..arr.len() {
//!         set(&mut arr, i, Complex128::new(i as f64, -(i as f64)));
//!     }
//! }
//! assert_eq!(arr.get(3), Complex128::new(3.0, -3.0));
//! ```
//!
//! Tags other than `"complex128"` and `"complex64"` select the generic
//! setter. Unknown tags are not an error.
//!
//! ## Debug Logging
//!
//! Set `DTYPE_SETTER_DEBUG=1` to trace setter creation in debug builds.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;

#[cfg(debug_assertions)]
use once_cell::sync::Lazy;

use crate::array::{Accessor, ArrayLike, Capability};
use crate::complex::{imag, imagf, real, realf, Complex128, Complex64};
use crate::dtype::DType;

/// Writes a double-precision complex element through the accessor protocol
pub type SetComplex128 = fn(&mut dyn Accessor<Complex128>, usize, Complex128);

/// Writes a single-precision complex element through the accessor protocol
pub type SetComplex64 = fn(&mut dyn Accessor<Complex64>, usize, Complex64);

/// Writes an element into any array-like target
pub type SetGeneric<T> = fn(&mut dyn ArrayLike<T>, usize, T);

#[cfg(debug_assertions)]
static SETTER_DEBUG: Lazy<bool> = Lazy::new(|| std::env::var_os("DTYPE_SETTER_DEBUG").is_some());

/// Check if setter debug logging is enabled via `DTYPE_SETTER_DEBUG` env var.
/// Only available in debug builds.
#[cfg(debug_assertions)]
pub(crate) fn setter_debug_enabled() -> bool {
    *SETTER_DEBUG
}

/// Emit setter debug logs in debug builds without relying on `eprintln!`.
#[cfg(debug_assertions)]
pub(crate) fn setter_debug_log(args: fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "{args}");
}

/// Trace line written for one setter creation
#[cfg(debug_assertions)]
pub(crate) fn setter_debug_line(dtype: &str, kind: SetterKind) -> String {
    format!("[dtype_setter] setter({:?}) -> {}", dtype, kind.as_str())
}

/// Which write routine a setter uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetterKind {
    Complex128,
    Complex64,
    Generic,
}

impl SetterKind {
    /// Select a routine by exact tag match. Anything unrecognized is generic.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "complex128" => SetterKind::Complex128,
            "complex64" => SetterKind::Complex64,
            _ => SetterKind::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SetterKind::Complex128 => "complex128",
            SetterKind::Complex64 => "complex64",
            SetterKind::Generic => "generic",
        }
    }
}

impl From<DType> for SetterKind {
    fn from(dtype: DType) -> Self {
        match dtype {
            DType::Complex128 => SetterKind::Complex128,
            DType::Complex64 => SetterKind::Complex64,
            _ => SetterKind::Generic,
        }
    }
}

/// Element setter selected for a data type.
///
/// `T` is the element type of the generic setter and has no effect on the
/// complex variants. Match once, outside the write loop, and call the
/// function pointer directly.
pub enum Setter<T> {
    Complex128(SetComplex128),
    Complex64(SetComplex64),
    Generic(SetGeneric<T>),
}

impl<T> Setter<T> {
    /// Setter for a parsed data type
    pub fn for_dtype(dtype: DType) -> Self {
        Self::for_kind(SetterKind::from(dtype))
    }

    /// Setter for a write routine
    pub fn for_kind(kind: SetterKind) -> Self {
        match kind {
            SetterKind::Complex128 => Setter::Complex128(set_complex128),
            SetterKind::Complex64 => Setter::Complex64(set_complex64),
            SetterKind::Generic => Setter::Generic(set_generic::<T>),
        }
    }

    pub fn kind(&self) -> SetterKind {
        match self {
            Setter::Complex128(_) => SetterKind::Complex128,
            Setter::Complex64(_) => SetterKind::Complex64,
            Setter::Generic(_) => SetterKind::Generic,
        }
    }

    pub fn complex128(self) -> Option<SetComplex128> {
        match self {
            Setter::Complex128(set) => Some(set),
            _ => None,
        }
    }

    pub fn complex64(self) -> Option<SetComplex64> {
        match self {
            Setter::Complex64(set) => Some(set),
            _ => None,
        }
    }

    pub fn generic(self) -> Option<SetGeneric<T>> {
        match self {
            Setter::Generic(set) => Some(set),
            _ => None,
        }
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setter<T> {}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Setter({})", self.kind().as_str())
    }
}

/// Return a setter for the data type named by `dtype`.
///
/// Only `"complex128"` and `"complex64"` select complex setters. Every other
/// string, including the empty string and unknown tags, selects the generic
/// setter.
pub fn setter<T>(dtype: &str) -> Setter<T> {
    let kind = SetterKind::from_tag(dtype);
    #[cfg(debug_assertions)]
    if setter_debug_enabled() {
        setter_debug_log(format_args!("{}", setter_debug_line(dtype, kind)));
    }
    Setter::for_kind(kind)
}

/// Set a double-precision complex element.
///
/// Both parts are read before the single accessor write. No bounds or NaN
/// checks.
#[inline]
pub fn set_complex128(target: &mut dyn Accessor<Complex128>, index: usize, value: Complex128) {
    let (re, im) = (real(value), imag(value));
    target.set(Complex128::new(re, im), index);
}

/// Set a single-precision complex element.
#[inline]
pub fn set_complex64(target: &mut dyn Accessor<Complex64>, index: usize, value: Complex64) {
    let (re, im) = (realf(value), imagf(value));
    target.set(Complex64::new(re, im), index);
}

/// Set an element of any array-like target, through its accessor protocol
/// if it has one and by index assignment otherwise.
#[inline]
pub fn set_generic<T>(target: &mut dyn ArrayLike<T>, index: usize, value: T) {
    match target.capability() {
        Capability::Accessor(arr) => arr.set(value, index),
        Capability::Indexed(buf) => buf[index] = value,
    }
}
