//! Operator overloads for composing vector expressions.
//!
//! ## Purpose
//!
//! Implements `+`, `-`, unary `-`, and `* scalar` on every vector
//! expression type (and on references to them), so trees compose with
//! ordinary arithmetic syntax. Each operator only constructs a node; no
//! arithmetic runs until evaluation.
//!
//! ## Design notes
//!
//! * **One macro, every node**: coherence forbids a blanket `impl Add for
//!   all VectorExpr`, so the impls are generated per node type.
//! * **Scalar position**: `expr * scalar` works for any expression;
//!   `scalar * vector` is provided for the primitive element types on the
//!   concrete leaf, mirroring the symmetric form. For composed operands on
//!   the left of a scalar, use [`VectorExpr::scale`].

// External dependencies
use core::ops::{Add, Mul, Neg, Sub};

// Internal dependencies
use crate::primitives::element::Element;
use crate::vector::cache::Memoized;
use crate::vector::concrete::Vector;
use crate::vector::expr::VectorExpr;
use crate::vector::nodes::{Difference, Map, Negation, Scale, Sum};

// For each expression type: `+` and `-` against any expression of the same
// shape, unary `-`, and `* scalar`.
macro_rules! impl_vector_ops {
    ($(impl[$($gen:tt)*] $ty:ty;)+) => {
        $(
            impl<$($gen)*, Rhs> Add<Rhs> for $ty
            where
                $ty: VectorExpr<N>,
                Rhs: VectorExpr<N, Elem = <$ty as VectorExpr<N>>::Elem>,
            {
                type Output = Sum<Self, Rhs, N>;

                #[inline]
                fn add(self, rhs: Rhs) -> Self::Output {
                    Sum::new(self, rhs)
                }
            }

            impl<$($gen)*, Rhs> Sub<Rhs> for $ty
            where
                $ty: VectorExpr<N>,
                Rhs: VectorExpr<N, Elem = <$ty as VectorExpr<N>>::Elem>,
            {
                type Output = Difference<Self, Rhs, N>;

                #[inline]
                fn sub(self, rhs: Rhs) -> Self::Output {
                    Difference::new(self, rhs)
                }
            }

            impl<$($gen)*> Neg for $ty
            where
                $ty: VectorExpr<N>,
            {
                type Output = Negation<Self, N>;

                #[inline]
                fn neg(self) -> Self::Output {
                    Negation::new(self)
                }
            }

            impl<$($gen)*> Mul<<$ty as VectorExpr<N>>::Elem> for $ty
            where
                $ty: VectorExpr<N>,
            {
                type Output = Scale<<$ty as VectorExpr<N>>::Elem, Self, N>;

                #[inline]
                fn mul(self, scalar: <$ty as VectorExpr<N>>::Elem) -> Self::Output {
                    Scale::new(scalar, self)
                }
            }
        )+
    };
}

impl_vector_ops! {
    impl[T: Element, const N: usize] Vector<T, N>;
    impl['v, T: Element, const N: usize] &'v Vector<T, N>;
    impl[L, R, const N: usize] Sum<L, R, N>;
    impl['v, L, R, const N: usize] &'v Sum<L, R, N>;
    impl[L, R, const N: usize] Difference<L, R, N>;
    impl['v, L, R, const N: usize] &'v Difference<L, R, N>;
    impl[E, const N: usize] Negation<E, N>;
    impl['v, E, const N: usize] &'v Negation<E, N>;
    impl[S, E, const N: usize] Scale<S, E, N>;
    impl['v, S, E, const N: usize] &'v Scale<S, E, N>;
    impl[F, Args, const N: usize] Map<F, Args, N>;
    impl['v, F, Args, const N: usize] &'v Map<F, Args, N>;
    impl[E: VectorExpr<N>, const N: usize] Memoized<E, N>;
    impl['v, E: VectorExpr<N>, const N: usize] &'v Memoized<E, N>;
}

// `scalar * vector` for the primitive element types. A generic form is not
// expressible under the orphan rules, so the common leaf case is spelled
// out per scalar type.
macro_rules! impl_scalar_mul {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Scale<$scalar, Vector<$scalar, N>, N>;

                #[inline]
                fn mul(self, vector: Vector<$scalar, N>) -> Self::Output {
                    Scale::new(self, vector)
                }
            }

            impl<'v, const N: usize> Mul<&'v Vector<$scalar, N>> for $scalar {
                type Output = Scale<$scalar, &'v Vector<$scalar, N>, N>;

                #[inline]
                fn mul(self, vector: &'v Vector<$scalar, N>) -> Self::Output {
                    Scale::new(self, vector)
                }
            }
        )+
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize);
