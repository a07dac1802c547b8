//! Data type dispatching element setters
//!
//! This crate turns an array data type tag into a specialized routine for
//! writing one element into an array-like container. It includes:
//!
//! - `DType` for array data type tags
//! - `Setter` and the `setter` factory
//! - Complex value types and interleaved complex arrays
//! - The `Accessor` / `ArrayLike` write capabilities of targets
//! - `SetterError` for strict parsing and array construction

// Prevent accidental debug output in library code.
#![deny(clippy::print_stderr)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod array;
pub mod complex;
pub mod dtype;
pub mod error;
pub mod setter;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use dtype_setter::prelude::*;
///
/// let set = setter::<i64>("foo").generic().unwrap();
/// let mut values = vec![1_i64, 2, 3];
/// set(&mut values, 1, 20);
/// assert_eq!(values, vec![1, 20, 3]);
/// ```
pub mod prelude {
    pub use super::array::{
        Accessor, AccessorVec, ArrayLike, Capability, Complex128Array, Complex64Array,
        ComplexArray,
    };
    pub use super::complex::{Complex128, Complex64};
    pub use super::dtype::{dtype, ArrayDType, DType};
    pub use super::error::{SetterError, SetterResult};
    pub use super::setter::{
        setter, SetComplex128, SetComplex64, SetGeneric, Setter, SetterKind,
    };
}

pub use prelude::*;
