//! Complex arrays backed by interleaved real storage.
//!
//! Element `i` occupies flat positions `2i` (real part) and `2i + 1`
//! (imaginary part) of the underlying buffer.

use num_complex::Complex;
use num_traits::Float;

use super::{Accessor, ArrayLike, Capability};
use crate::error::{SetterError, SetterResult};

/// Complex array with interleaved (re, im) storage
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexArray<F> {
    data: Vec<F>,
}

/// Array of double-precision complex numbers
pub type Complex128Array = ComplexArray<f64>;

/// Array of single-precision complex numbers
pub type Complex64Array = ComplexArray<f32>;

impl<F: Float> ComplexArray<F> {
    /// Create an array of `len` complex zeros
    pub fn zeros(len: usize) -> Self {
        ComplexArray {
            data: vec![F::zero(); len * 2],
        }
    }

    /// Wrap an interleaved buffer. The buffer must hold whole (re, im) pairs.
    pub fn from_interleaved(data: Vec<F>) -> SetterResult<Self> {
        if data.len() % 2 != 0 {
            return Err(SetterError::odd_interleaved_length(data.len()));
        }
        Ok(ComplexArray { data })
    }

    /// Build an array from complex values
    pub fn from_complex<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Complex<F>>,
    {
        let values = values.into_iter();
        let mut data = Vec::with_capacity(values.size_hint().0 * 2);
        for z in values {
            data.push(z.re);
            data.push(z.im);
        }
        ComplexArray { data }
    }

    /// Number of complex elements
    pub fn len(&self) -> usize {
        self.data.len() / 2
    }

    /// Check if the array is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Underlying interleaved buffer
    pub fn as_interleaved(&self) -> &[F] {
        &self.data
    }

    /// Consume the array, returning the interleaved buffer
    pub fn into_interleaved(self) -> Vec<F> {
        self.data
    }
}

impl<F: Float> Accessor<Complex<F>> for ComplexArray<F> {
    #[inline]
    fn get(&self, index: usize) -> Complex<F> {
        let offset = index * 2;
        Complex::new(self.data[offset], self.data[offset + 1])
    }

    #[inline]
    fn set(&mut self, value: Complex<F>, index: usize) {
        let offset = index * 2;
        self.data[offset] = value.re;
        self.data[offset + 1] = value.im;
    }
}

impl<F: Float> ArrayLike<Complex<F>> for ComplexArray<F> {
    #[inline]
    fn capability(&mut self) -> Capability<'_, Complex<F>> {
        Capability::Accessor(self)
    }
}
