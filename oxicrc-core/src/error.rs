//! Error types for CRC model construction.
//!
//! The engine is deliberately infallible at run time: updating a stream with
//! any byte range always succeeds, and a missing lookup table degrades the
//! evaluation strategy instead of raising. The only operations that can fail
//! are the ones that validate caller-supplied model parameters, and those
//! fail fast with one of the variants below.

use thiserror::Error;

/// The error type for OxiCrc model construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CrcError {
    /// Register width outside the range a state word can hold.
    #[error("bitsize {bitsize} out of range (expected 1..={max})")]
    BitsizeOutOfRange {
        /// The rejected width.
        bitsize: u32,
        /// Widest register the chosen state word supports.
        max: u32,
    },

    /// Generator polynomial whose x^0 coefficient is clear.
    #[error("polynomial {polynomial:#x} is even; the low bit must be set")]
    EvenPolynomial {
        /// The rejected polynomial, masked to the model's width.
        polynomial: u64,
    },

    /// Numeric identifier that names no known evaluation strategy.
    #[error("unknown algorithm identifier {id} (expected -2, -1, 0, 1, 4, 8 or 16)")]
    UnknownAlgorithm {
        /// The rejected identifier.
        id: i8,
    },
}

impl CrcError {
    /// Create a bitsize-out-of-range error.
    pub fn bitsize_out_of_range(bitsize: u32, max: u32) -> Self {
        Self::BitsizeOutOfRange { bitsize, max }
    }

    /// Create an even-polynomial error.
    pub fn even_polynomial(polynomial: u64) -> Self {
        Self::EvenPolynomial { polynomial }
    }

    /// Create an unknown-algorithm error.
    pub fn unknown_algorithm(id: i8) -> Self {
        Self::UnknownAlgorithm { id }
    }
}

/// Result type alias for OxiCrc operations.
pub type Result<T> = std::result::Result<T, CrcError>;
