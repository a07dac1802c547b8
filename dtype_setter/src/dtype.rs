//! Array data type tags.
//!
//! `DType` is the closed set of element representations used by arrays in
//! this family. Complex data types are stored as interleaved real components,
//! so `complex128` sits on top of `float64` storage and `complex64` on top of
//! `float32` storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::array::{AccessorVec, ComplexArray};
use crate::error::{SetterError, SetterResult};

/// Array data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    // Floating point types
    Float64,
    Float32,
    // Signed integer types
    Int32,
    Int16,
    Int8,
    // Unsigned integer types
    Uint32,
    Uint16,
    Uint8,
    /// Clamped unsigned 8-bit integers
    Uint8c,
    // Complex types: stored as interleaved (re, im) pairs
    Complex128,
    Complex64,
    // Other types
    Bool,
    /// Arbitrary elements with no typed storage
    #[default]
    Generic,
}

impl DType {
    /// Every data type, in declaration order.
    pub const ALL: [DType; 13] = [
        DType::Float64,
        DType::Float32,
        DType::Int32,
        DType::Int16,
        DType::Int8,
        DType::Uint32,
        DType::Uint16,
        DType::Uint8,
        DType::Uint8c,
        DType::Complex128,
        DType::Complex64,
        DType::Bool,
        DType::Generic,
    ];

    /// Canonical tag for this data type
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float64 => "float64",
            DType::Float32 => "float32",
            DType::Int32 => "int32",
            DType::Int16 => "int16",
            DType::Int8 => "int8",
            DType::Uint32 => "uint32",
            DType::Uint16 => "uint16",
            DType::Uint8 => "uint8",
            DType::Uint8c => "uint8c",
            DType::Complex128 => "complex128",
            DType::Complex64 => "complex64",
            DType::Bool => "bool",
            DType::Generic => "generic",
        }
    }

    /// Check if this is a complex data type
    pub fn is_complex(&self) -> bool {
        matches!(self, DType::Complex128 | DType::Complex64)
    }

    /// Data type of the interleaved storage behind a complex data type.
    /// Returns None for non-complex types
    pub fn component_dtype(&self) -> Option<DType> {
        match self {
            DType::Complex128 => Some(DType::Float64),
            DType::Complex64 => Some(DType::Float32),
            _ => None,
        }
    }

    /// Size of one element in bytes, or None for generic arrays
    pub fn bytes_per_element(&self) -> Option<usize> {
        match self {
            DType::Float64 => Some(8),
            DType::Float32 => Some(4),
            DType::Int32 | DType::Uint32 => Some(4),
            DType::Int16 | DType::Uint16 => Some(2),
            DType::Int8 | DType::Uint8 | DType::Uint8c | DType::Bool => Some(1),
            DType::Complex128 => Some(16),
            DType::Complex64 => Some(8),
            DType::Generic => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: unknown tags are an error.
///
/// Setter creation does not go through this; see [`crate::setter::setter`].
impl FromStr for DType {
    type Err = SetterError;

    fn from_str(tag: &str) -> SetterResult<Self> {
        DType::ALL
            .iter()
            .copied()
            .find(|dt| dt.as_str() == tag)
            .ok_or_else(|| SetterError::unknown_dtype(tag))
    }
}

/// Arrays that know their own data type.
pub trait ArrayDType {
    fn dtype(&self) -> DType;
}

/// Data type of an array
pub fn dtype<A: ArrayDType + ?Sized>(array: &A) -> DType {
    array.dtype()
}

macro_rules! impl_array_dtype {
    ($ty:ty, $dt:expr) => {
        impl ArrayDType for Vec<$ty> {
            #[inline]
            fn dtype(&self) -> DType {
                $dt
            }
        }

        impl ArrayDType for [$ty] {
            #[inline]
            fn dtype(&self) -> DType {
                $dt
            }
        }
    };
}

impl_array_dtype!(f64, DType::Float64);
impl_array_dtype!(f32, DType::Float32);
impl_array_dtype!(i32, DType::Int32);
impl_array_dtype!(i16, DType::Int16);
impl_array_dtype!(i8, DType::Int8);
impl_array_dtype!(u32, DType::Uint32);
impl_array_dtype!(u16, DType::Uint16);
impl_array_dtype!(u8, DType::Uint8);
impl_array_dtype!(bool, DType::Bool);

impl ArrayDType for ComplexArray<f64> {
    #[inline]
    fn dtype(&self) -> DType {
        DType::Complex128
    }
}

impl ArrayDType for ComplexArray<f32> {
    #[inline]
    fn dtype(&self) -> DType {
        DType::Complex64
    }
}

impl<T> ArrayDType for AccessorVec<T> {
    #[inline]
    fn dtype(&self) -> DType {
        DType::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{Complex128Array, Complex64Array};

    // ── as_str / from_str ─────────────────────────────────────────────────────

    #[test]
    fn test_tags_parse_back_to_same_dtype() {
        for dt in DType::ALL {
            assert_eq!(dt.as_str().parse::<DType>(), Ok(dt), "tag {}", dt);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tags() {
        assert_eq!(
            "foo".parse::<DType>(),
            Err(SetterError::UnknownDType("foo".to_string()))
        );
        assert!("".parse::<DType>().is_err());
        assert!("Complex128".parse::<DType>().is_err());
        assert!(" complex128".parse::<DType>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(DType::Complex128.to_string(), "complex128");
        assert_eq!(DType::Uint8c.to_string(), "uint8c");
    }

    #[test]
    fn test_default_is_generic() {
        assert_eq!(DType::default(), DType::Generic);
    }

    // ── is_complex / component_dtype ──────────────────────────────────────────

    #[test]
    fn test_is_complex_only_for_complex_variants() {
        let complex: Vec<DType> = DType::ALL.into_iter().filter(|dt| dt.is_complex()).collect();
        assert_eq!(complex, vec![DType::Complex128, DType::Complex64]);
    }

    #[test]
    fn test_component_dtype() {
        assert_eq!(DType::Complex128.component_dtype(), Some(DType::Float64));
        assert_eq!(DType::Complex64.component_dtype(), Some(DType::Float32));
        assert_eq!(DType::Float64.component_dtype(), None);
        assert_eq!(DType::Generic.component_dtype(), None);
    }

    #[test]
    fn test_complex_element_is_two_components_wide() {
        for dt in [DType::Complex128, DType::Complex64] {
            let component = dt.component_dtype().unwrap();
            assert_eq!(
                dt.bytes_per_element(),
                component.bytes_per_element().map(|n| n * 2)
            );
        }
        assert_eq!(DType::Generic.bytes_per_element(), None);
    }

    // ── serde ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&DType::Complex64).unwrap(),
            "\"complex64\""
        );
        let dt: DType = serde_json::from_str("\"uint8c\"").unwrap();
        assert_eq!(dt, DType::Uint8c);
        assert!(serde_json::from_str::<DType>("\"foo\"").is_err());
    }

    // ── dtype() ───────────────────────────────────────────────────────────────

    #[test]
    fn test_dtype_of_arrays() {
        assert_eq!(dtype(&vec![1.0_f64, 2.0]), DType::Float64);
        assert_eq!(dtype(&[1_u8, 2][..]), DType::Uint8);
        assert_eq!(dtype(&vec![true]), DType::Bool);
        assert_eq!(dtype(&Complex128Array::zeros(2)), DType::Complex128);
        assert_eq!(dtype(&Complex64Array::zeros(2)), DType::Complex64);
        assert_eq!(dtype(&AccessorVec::from(vec![1, 2, 3])), DType::Generic);
    }
}
