//! The vector expression abstraction.
//!
//! ## Purpose
//!
//! This module defines [`VectorExpr`], the contract every vector-shaped
//! expression satisfies: it knows its element type, its fixed dimension,
//! and how to produce the element at a given index. Concrete vectors and
//! every composite node implement it, so arbitrary trees compose through
//! one interface.
//!
//! ## Design notes
//!
//! * **Compile-time polymorphism**: variants are distinguished by type,
//!   never by runtime dispatch; `value_at` calls inline through the whole
//!   tree.
//! * **Shape as type information**: the dimension is the `N` const
//!   parameter and the element type is the `Elem` associated item. Together
//!   they form the static shape record of an expression, readable without
//!   evaluating it. Operand compatibility is enforced where composites are
//!   constructed, so a mismatched tree never exists.
//! * **Borrowed operands**: the blanket impl for `&E` lets composites hold
//!   leaves by reference; the borrow checker pins every operand's lifetime
//!   to the tree that uses it.
//!
//! ## Key concepts
//!
//! * **Lazy composition**: the provided combinators (`map`, `scale`,
//!   `fold`, `memoized`) build nodes; only `value_at`, `eval`, and
//!   `Reduce::value` perform arithmetic.
//!
//! ## Invariants
//!
//! * `value_at(index)` is only defined for `index < N`; out-of-range access
//!   is a contract violation and fails fast rather than returning an error.
//!
//! ## Non-goals
//!
//! * Runtime-sized vectors; the dimension is always part of the type.

// Internal dependencies
use crate::primitives::element::Element;
use crate::vector::cache::Memoized;
use crate::vector::concrete::Vector;
use crate::vector::nodes::{Map, Reduce, Scale};

// ============================================================================
// VectorExpr
// ============================================================================

/// An expression evaluating to a vector of `N` elements.
///
/// Implemented by the concrete [`Vector`] leaf, by every composite node,
/// and by references to any of them, so operands can be borrowed or moved
/// into a parent node interchangeably.
pub trait VectorExpr<const N: usize> {
    /// Element type produced by evaluation.
    type Elem: Element;

    /// Evaluate the element at `index`.
    ///
    /// Only defined for `index < N`. Out-of-range access is a contract
    /// violation on a hot path: composite nodes guard it with a debug
    /// assertion and the leaf panics on its backing array, but there is no
    /// recoverable error path.
    fn value_at(&self, index: usize) -> Self::Elem;

    /// Dimension of this expression, without evaluating it.
    #[inline]
    fn dim(&self) -> usize {
        N
    }

    /// Evaluate every element and materialize the result as a concrete
    /// [`Vector`].
    #[inline]
    fn eval(&self) -> Vector<Self::Elem, N> {
        Vector::from_fn(|index| self.value_at(index))
    }

    /// Apply `f` lazily to every element.
    ///
    /// The multi-operand form lives in [`map`](crate::vector::map).
    #[inline]
    fn map<F, O>(self, f: F) -> Map<F, (Self,), N>
    where
        Self: Sized,
        F: Fn(Self::Elem) -> O,
        O: Element,
    {
        Map::new(f, (self,))
    }

    /// Multiply every element lazily by `scalar`.
    ///
    /// The scalar is captured by value at composition time; it is not
    /// itself an expression.
    #[inline]
    fn scale(self, scalar: Self::Elem) -> Scale<Self::Elem, Self, N>
    where
        Self: Sized,
    {
        Scale::new(scalar, self)
    }

    /// Fold the elements left-to-right into a single value, lazily.
    ///
    /// The seed is always caller-supplied: a zero-dimension expression
    /// folds to `seed`, a one-element expression to `f(seed, e0)`. The
    /// returned [`Reduce`] node evaluates on [`Reduce::value`].
    #[inline]
    fn fold<A, F>(self, seed: A, f: F) -> Reduce<A, F, Self, N>
    where
        Self: Sized,
        A: Copy,
        F: Fn(A, Self::Elem) -> A,
    {
        Reduce::new(seed, f, self)
    }

    /// Wrap this expression in a per-index memoization cache.
    ///
    /// The first `value_at(i)` on the wrapper computes through the wrapped
    /// tree and stores the result; later reads of the same index return the
    /// stored element without touching the operands.
    #[inline]
    fn memoized(self) -> Memoized<Self, N>
    where
        Self: Sized,
    {
        Memoized::new(self)
    }
}

// Composite nodes hold operands by value; this impl lets that value be a
// borrow, which is how leaves normally enter a tree.
impl<'a, E, const N: usize> VectorExpr<N> for &'a E
where
    E: VectorExpr<N>,
{
    type Elem = E::Elem;

    #[inline]
    fn value_at(&self, index: usize) -> Self::Elem {
        (**self).value_at(index)
    }
}
