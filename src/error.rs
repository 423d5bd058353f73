//! Error types for the builders and the Monte-Carlo driver
//!
//! The soft decoders themselves are infallible: their preconditions are the
//! caller's job and a violation shows up as NaN/Inf in the output.

use thiserror::Error;

/// Result type for fallible operations in this crate
pub type LlrResult<T> = Result<T, LlrError>;

/// Errors raised outside the per-sample decoding kernels
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlrError {
    /// Constellation order must be a power of two (and at least 2)
    #[error("constellation order {0} is not a power of two")]
    OrderNotPowerOfTwo(usize),

    /// Square QAM needs an even number of bits per symbol
    #[error("constellation order {0} is not a square QAM order")]
    NotSquare(usize),

    /// Two sequences that must line up do not
    #[error("length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Noise level must be finite and strictly positive
    #[error("invalid noise level {0}")]
    InvalidNoise(f64),

    /// Prior has a negative entry or does not sum to one
    #[error("prior mass function is not a probability distribution")]
    InvalidPrior,
}
