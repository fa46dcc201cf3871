//! Error types for runtime-checked conversions.
//!
//! ## Purpose
//!
//! Almost every misuse of this crate is rejected by the type system at
//! composition time (dimension or element-type mismatches simply do not
//! compile). The one boundary that cannot be checked statically is
//! conversion from a runtime-sized slice into a fixed-dimension
//! [`Vector`](crate::vector::Vector); this module defines the error
//! returned there.
//!
//! ## Design notes
//!
//! * **Structured fields**: errors carry the offending sizes rather than
//!   pre-formatted strings, keeping the type `no_std`-compatible.
//! * **Fail-fast elsewhere**: out-of-range `value_at` indices are contract
//!   violations on a hot path and panic; they are deliberately not
//!   represented here.
//!
//! ## Non-goals
//!
//! * Recoverable evaluation errors (evaluation is total for in-range
//!   indices).

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Error produced by runtime-checked constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExprError {
    /// A slice of the wrong length was converted into a fixed-dimension
    /// vector.
    LengthMismatch {
        /// Length of the provided slice.
        got: usize,
        /// Dimension of the target vector type.
        expected: usize,
    },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::LengthMismatch { got, expected } => write!(
                f,
                "slice of length {} cannot fill a vector of dimension {}",
                got, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExprError {}
