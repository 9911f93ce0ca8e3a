//! Error types for encoding, decoding, and checksum operations.

use thiserror::Error;

/// Errors reported by the codec and checksum routines
#[derive(Error, Debug)]
pub enum Error {
    /// Input sequence length does not match the declared code parameters
    #[error("length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A sequence element outside {0, 1}
    #[error("invalid bit value {value} at index {index}")]
    InvalidBit { value: u8, index: usize },

    /// Parameters that cannot describe a Hamming code
    #[error("invalid code parameters: {0}")]
    InvalidParameters(String),

    /// The syndrome names a position outside the codeword, so the error
    /// pattern cannot be a single flipped bit
    #[error("syndrome {syndrome} is outside the codeword, uncorrectable error pattern")]
    Uncorrectable { syndrome: usize },
}

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;
