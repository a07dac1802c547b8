//! Complex element values.
//!
//! Double and single precision complex numbers are `num_complex` values.
//! The part readers mirror how setters see a complex value: two
//! independently readable real components.

pub use num_complex::Complex;

/// Double-precision complex number (two `f64` components)
pub type Complex128 = Complex<f64>;

/// Single-precision complex number (two `f32` components)
pub type Complex64 = Complex<f32>;

/// Real component of a double-precision complex number
#[inline]
pub fn real(z: Complex128) -> f64 {
    z.re
}

/// Imaginary component of a double-precision complex number
#[inline]
pub fn imag(z: Complex128) -> f64 {
    z.im
}

/// Real component of a single-precision complex number
#[inline]
pub fn realf(z: Complex64) -> f32 {
    z.re
}

/// Imaginary component of a single-precision complex number
#[inline]
pub fn imagf(z: Complex64) -> f32 {
    z.im
}
