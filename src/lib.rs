//! # vexpr — Lazy expression trees for fixed-dimension vectors and complex numbers
//!
//! This crate builds arithmetic over small, fixed-size numeric aggregates as
//! *typed expression trees*: composing `+`, `-`, `*`, `map`, and `fold` on
//! vectors or complex numbers allocates nothing and computes nothing. Work
//! happens only when a result is requested (one element at a time for
//! vectors, one value for complex numbers and folds), and each request pulls
//! recursively through the tree without materializing intermediates.
//!
//! Every node kind is a distinct type, so composition is resolved entirely
//! at compile time: there is no runtime dispatch, and shape errors
//! (mismatched dimensions or element types) are compile errors rather than
//! runtime conditions.
//!
//! ## Quick Start
//!
//! ```rust
//! use vexpr_rs::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0]);
//! let b = Vector::new([4.0, 5.0, 6.0]);
//!
//! // Composition only builds a tree of borrows; no arithmetic yet.
//! let expr = (&a + &b) * 2.0;
//!
//! // Evaluation is per element...
//! assert_eq!(expr.value_at(1), 14.0);
//!
//! // ...or materialized all at once.
//! assert_eq!(expr.eval(), Vector::new([10.0, 14.0, 18.0]));
//! ```
//!
//! Elementwise combination generalizes to caller-supplied functions over
//! one to three operands, and folds collapse a vector to a scalar:
//!
//! ```rust
//! use vexpr_rs::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0, 4.0]);
//! let b = Vector::new([10.0, 20.0, 30.0, 40.0]);
//!
//! let blend = map(|x: f64, y: f64| 0.75 * x + 0.25 * y, (&a, &b));
//! assert_eq!(blend.value_at(0), 3.25);
//!
//! let total = (&a).fold(0.0, |acc, x| acc + x);
//! assert_eq!(total.value(), 10.0);
//! ```
//!
//! ## Memoization
//!
//! By default, every element access recomputes through the whole tree;
//! that is correct, but repeated reads of the same index by aliased
//! consumers repeat the work. Any vector expression can opt into a
//! per-index cache, and folds into a single-slot cache:
//!
//! ```rust
//! use vexpr_rs::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0]);
//! let b = Vector::new([4.0, 5.0, 6.0]);
//!
//! let cached = (&a + &b).memoized();
//! assert_eq!(cached.value_at(0), 5.0); // computed through the tree
//! assert_eq!(cached.value_at(0), 5.0); // served from the cache
//!
//! let total = (&a).fold(0.0, |acc, x| acc + x).memoized();
//! assert_eq!(total.value(), 6.0); // folds once
//! assert_eq!(total.value(), 6.0); // cached
//! ```
//!
//! ## Complex numbers
//!
//! The complex family follows the same pattern with a single-value
//! evaluation entry point and no memoization (every evaluation is O(1)):
//!
//! ```rust
//! use vexpr_rs::prelude::*;
//!
//! let c = Complex::new(3.0, -2.0);
//!
//! assert_eq!(c.conj().eval(), Complex::new(3.0, 2.0));
//! assert_eq!((&c + (-&c)).eval(), Complex::zero());
//! ```
//!
//! ## Static shape checking
//!
//! Operands of a composed expression must share their dimension and element
//! type; violations fail at composition, before any evaluation exists:
//!
//! ```compile_fail
//! use vexpr_rs::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0]);
//! let b = Vector::new([1.0, 2.0]);
//! let _ = &a + &b; // dimensions 3 and 2 cannot unify
//! ```
//!
//! ```compile_fail
//! use vexpr_rs::prelude::*;
//!
//! let a = Vector::new([1.0f64, 2.0, 3.0]);
//! let b = Vector::new([1i32, 2, 3]);
//! let _ = &a + &b; // element types differ; convert explicitly with `cast`
//! ```
//!
//! Mixed element types are supported by converting a leaf explicitly:
//!
//! ```rust
//! use vexpr_rs::prelude::*;
//!
//! let a = Vector::new([1.0f64, 2.0, 3.0]);
//! let b = Vector::new([1i32, 2, 3]).cast::<f64>();
//! assert_eq!((&a + &b).eval(), Vector::new([2.0, 4.0, 6.0]));
//! ```
//!
//! ## Lifetimes
//!
//! Composite nodes borrow their operands, so an expression can never
//! outlive a vector it reads from; the borrow checker enforces the
//! operand-lifetime rules that make by-reference composition safe. Owned
//! composition works too (`Vector` is `Copy`), trading a copy of each leaf
//! for a tree with no lifetime ties.
//!
//! ## `no_std`
//!
//! The crate is allocation-free (`[T; N]` storage throughout) and supports
//! `no_std` by disabling the default `std` feature, which only gates the
//! `std::error::Error` impl for [`ExprError`]:
//!
//! ```toml
//! [dependencies]
//! vexpr-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - element trait and error types.
//
// Contains the `Element` bound shared by both expression families and the
// error type for runtime-checked conversions.
pub mod primitives;

// Layer 2: Vector expressions.
//
// Contains the `VectorExpr` trait, the concrete `Vector` leaf, the pure
// composite nodes (Sum, Difference, Negation, Scale, Map, Reduce), the
// memoization wrappers, and the operator overloads.
pub mod vector;

// Layer 3: Complex expressions.
//
// Contains the `ComplexExpr` trait, the concrete `Complex` leaf, and the
// composite nodes (Sum, Negation, Conjugate).
pub mod complex;

// ============================================================================
// Root Re-exports
// ============================================================================

pub use complex::{Complex, ComplexExpr};
pub use primitives::element::Element;
pub use primitives::errors::ExprError;
pub use vector::{map, Vector, VectorExpr};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use vexpr_rs::prelude::*;
/// ```
///
/// Node types are not re-exported here; they are usually constructed
/// through operators and combinators, and remain available under
/// [`vector`] and [`complex`] when named explicitly.
pub mod prelude {
    pub use crate::complex::{Complex, ComplexExpr};
    pub use crate::primitives::element::Element;
    pub use crate::primitives::errors::ExprError;
    pub use crate::vector::{map, Vector, VectorExpr};
}
