//! The concrete complex-number leaf.
//!
//! ## Purpose
//!
//! [`Complex`] owns a real and an imaginary part and anchors the complex
//! expression family the way [`Vector`](crate::vector::Vector) anchors the
//! vector family.
//!
//! ## Design notes
//!
//! * **Value semantics**: a pair of `Copy` elements; copies are
//!   independent.
//! * **No dimension parameter**: evaluation has a single entry point and
//!   the shape record is just the element type.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::complex::expr::ComplexExpr;
use crate::primitives::element::Element;

// ============================================================================
// Complex
// ============================================================================

/// A complex number with parts of element type `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    re: T,
    im: T,
}

impl<T: Element> Complex<T> {
    /// Create a complex number from its real and imaginary parts.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Create a purely real complex number.
    #[inline]
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// The additive identity, `0 + 0i`.
    #[inline]
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    /// The imaginary unit, `0 + 1i`.
    #[inline]
    pub fn i() -> Self {
        Self {
            re: T::zero(),
            im: T::one(),
        }
    }

    /// Squared magnitude, `re² + im²`.
    #[inline]
    pub fn magnitude_sq(&self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl<T: Element + Float> Complex<T> {
    /// Magnitude (modulus). Floating-point elements only.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_sq().sqrt()
    }

    /// Argument (phase angle), in radians.
    #[inline]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Element> ComplexExpr for Complex<T> {
    type Elem = T;

    // The leaf: stored parts, no computation.
    #[inline]
    fn re(&self) -> T {
        self.re
    }

    #[inline]
    fn im(&self) -> T {
        self.im
    }
}

impl<T: Element> Default for Complex<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

impl<T: Element + PartialOrd + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::zero() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}
