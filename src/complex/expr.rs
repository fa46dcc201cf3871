//! The complex expression abstraction.
//!
//! ## Purpose
//!
//! This module defines [`ComplexExpr`], the contract for expressions that
//! evaluate to one complex number. It mirrors
//! [`VectorExpr`](crate::vector::VectorExpr) with the index removed: the
//! shape record is just the element type, and evaluation produces the two
//! parts of a single value.
//!
//! ## Design notes
//!
//! * **Part accessors as the contract**: nodes derive `re` and `im`
//!   independently; `eval` materializes both into a concrete
//!   [`Complex`]. Deriving parts separately keeps node rules as small as
//!   the arithmetic they describe (a conjugate only touches `im`).
//!
//! ## Non-goals
//!
//! * Memoization (see the layer doc).

// Internal dependencies
use crate::complex::concrete::Complex;
use crate::complex::nodes::Conjugate;
use crate::primitives::element::Element;

// ============================================================================
// ComplexExpr
// ============================================================================

/// An expression evaluating to a single complex number.
pub trait ComplexExpr {
    /// Element type of the real and imaginary parts.
    type Elem: Element;

    /// Evaluate the real part.
    fn re(&self) -> Self::Elem;

    /// Evaluate the imaginary part.
    fn im(&self) -> Self::Elem;

    /// Evaluate both parts and materialize a concrete [`Complex`].
    #[inline]
    fn eval(&self) -> Complex<Self::Elem> {
        Complex::new(self.re(), self.im())
    }

    /// Compose the complex conjugate of this expression, lazily.
    #[inline]
    fn conj(self) -> Conjugate<Self>
    where
        Self: Sized,
    {
        Conjugate::new(self)
    }
}

impl<'a, E> ComplexExpr for &'a E
where
    E: ComplexExpr,
{
    type Elem = E::Elem;

    #[inline]
    fn re(&self) -> Self::Elem {
        (**self).re()
    }

    #[inline]
    fn im(&self) -> Self::Elem {
        (**self).im()
    }
}
