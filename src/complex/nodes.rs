//! Composite complex expression nodes and their operators.
//!
//! ## Purpose
//!
//! The three pure node kinds of the complex family: [`Sum`], [`Negation`],
//! and [`Conjugate`]. Each derives its parts from its operands on demand;
//! nothing is computed at composition time.
//!
//! ## Design notes
//!
//! * **Same shape rules as vectors**: operands of a `Sum` must share one
//!   element type, enforced by constructor bounds at composition.
//! * **Conjugation is a node**: `conj` negates only the imaginary part and
//!   composes like any other operation, so `c.conj().conj()` evaluates back
//!   to `c` without ever materializing the intermediate.

// External dependencies
use core::ops::{Add, Neg};

// Internal dependencies
use crate::complex::concrete::Complex;
use crate::complex::expr::ComplexExpr;
use crate::primitives::element::Element;

// ============================================================================
// Nodes
// ============================================================================

/// Lazy componentwise sum of two complex expressions.
#[derive(Debug, Clone, Copy)]
pub struct Sum<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Sum<L, R>
where
    L: ComplexExpr,
    R: ComplexExpr<Elem = L::Elem>,
{
    /// Compose the sum of `lhs` and `rhs`.
    #[inline]
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> ComplexExpr for Sum<L, R>
where
    L: ComplexExpr,
    R: ComplexExpr<Elem = L::Elem>,
{
    type Elem = L::Elem;

    #[inline]
    fn re(&self) -> Self::Elem {
        self.lhs.re() + self.rhs.re()
    }

    #[inline]
    fn im(&self) -> Self::Elem {
        self.lhs.im() + self.rhs.im()
    }
}

/// Lazy negation of a complex expression (both parts).
#[derive(Debug, Clone, Copy)]
pub struct Negation<E> {
    inner: E,
}

impl<E> Negation<E>
where
    E: ComplexExpr,
{
    /// Compose the negation of `inner`.
    #[inline]
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E> ComplexExpr for Negation<E>
where
    E: ComplexExpr,
{
    type Elem = E::Elem;

    #[inline]
    fn re(&self) -> Self::Elem {
        -self.inner.re()
    }

    #[inline]
    fn im(&self) -> Self::Elem {
        -self.inner.im()
    }
}

/// Lazy complex conjugate (negated imaginary part).
#[derive(Debug, Clone, Copy)]
pub struct Conjugate<E> {
    inner: E,
}

impl<E> Conjugate<E>
where
    E: ComplexExpr,
{
    /// Compose the conjugate of `inner`.
    #[inline]
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E> ComplexExpr for Conjugate<E>
where
    E: ComplexExpr,
{
    type Elem = E::Elem;

    #[inline]
    fn re(&self) -> Self::Elem {
        self.inner.re()
    }

    #[inline]
    fn im(&self) -> Self::Elem {
        -self.inner.im()
    }
}

// ============================================================================
// Operators
// ============================================================================

// `+` against any complex expression of the same element type, and unary
// `-`, for each expression type and references to it.
macro_rules! impl_complex_ops {
    ($(impl[$($gen:tt)*] $ty:ty;)+) => {
        $(
            impl<$($gen)*, Rhs> Add<Rhs> for $ty
            where
                $ty: ComplexExpr,
                Rhs: ComplexExpr<Elem = <$ty as ComplexExpr>::Elem>,
            {
                type Output = Sum<Self, Rhs>;

                #[inline]
                fn add(self, rhs: Rhs) -> Self::Output {
                    Sum::new(self, rhs)
                }
            }

            impl<$($gen)*> Neg for $ty
            where
                $ty: ComplexExpr,
            {
                type Output = Negation<Self>;

                #[inline]
                fn neg(self) -> Self::Output {
                    Negation::new(self)
                }
            }
        )+
    };
}

impl_complex_ops! {
    impl[T: Element] Complex<T>;
    impl['c, T: Element] &'c Complex<T>;
    impl[L, R] Sum<L, R>;
    impl['c, L, R] &'c Sum<L, R>;
    impl[E] Negation<E>;
    impl['c, E] &'c Negation<E>;
    impl[E] Conjugate<E>;
    impl['c, E] &'c Conjugate<E>;
}
