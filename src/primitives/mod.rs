//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundations every expression family builds on:
//! - The [`Element`](element::Element) trait bounding the scalar types a
//!   vector or complex expression may contain
//! - The crate error type for the few runtime-checked conversions
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Complex expressions
//!   ↓
//! Layer 2: Vector expressions
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Scalar element trait for expression element types.
pub mod element;

/// Error types for runtime-checked conversions.
pub mod errors;
