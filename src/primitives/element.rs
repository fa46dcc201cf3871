//! Scalar element types usable inside vector and complex expressions.
//!
//! ## Purpose
//!
//! This module defines [`Element`], the bound every expression element type
//! must satisfy. Expression nodes combine elements with `+`, `-`, `*` and
//! unary negation, compare them for equality, and need the additive and
//! multiplicative identities for folds and tests.
//!
//! ## Design notes
//!
//! * **Blanket implementation**: `Element` is a trait alias over
//!   `num_traits::Num` plus `Neg` and `Copy`; any qualifying type (all
//!   signed primitives, `f32`, `f64`) implements it automatically.
//! * **Copy semantics**: elements are returned by value from `value_at`,
//!   so `Copy` is required rather than `Clone`.
//! * **Integers are first-class**: nothing here requires floating-point;
//!   `Float`-only conveniences take a separate `num_traits::Float` bound at
//!   their definition site.
//!
//! ## Invariants
//!
//! * `T::zero()` is the additive identity and `T::one()` the multiplicative
//!   identity for every `Element` type.
//!
//! ## Non-goals
//!
//! * Unsigned element types (negation is part of the core node set).
//! * Arbitrary-precision or wrapper numeric types without `Copy`.

// External dependencies
use core::fmt::Debug;
use core::ops::Neg;
use num_traits::Num;

/// Scalar element of a vector or complex expression.
///
/// Implemented automatically for every `Copy` numeric type that supports
/// the arithmetic the expression nodes perform: the signed integers and
/// the floating-point primitives.
pub trait Element: Num + Neg<Output = Self> + Copy + Debug {}

impl<T> Element for T where T: Num + Neg<Output = Self> + Copy + Debug {}
