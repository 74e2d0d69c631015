//! Error types for field arithmetic and codec operations

use thiserror::Error;

/// Errors raised by GF(2^m) arithmetic and the linear solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field exponent outside the supported range
    #[error("field exponent {m} is outside the supported range 1..={max}")]
    DegreeTooLarge { m: u32, max: u32 },

    /// Zero has no multiplicative inverse
    #[error("division by a zero field element")]
    DivideByZero,

    /// Gauss-Jordan elimination found no usable pivot or failed the
    /// identity check; the system is malformed or over-corrupted
    #[error("linear system over the field has no unique solution")]
    NonSolvableSystem,
}

/// Type alias for Result with FieldError
pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Errors raised while encoding or decoding a Reed-Solomon block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Encode input exceeds the k message symbols the code carries
    #[error("message of {len} symbols exceeds the maximum of {max}")]
    MessageTooLong { len: usize, max: usize },

    /// Decode input exceeds the codeword length n
    #[error("received block of {len} symbols exceeds the codeword length {max}")]
    BlockTooLong { len: usize, max: usize },

    /// Field arithmetic failed, typically because the block is corrupted
    /// beyond the correction capability of the code
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Type alias for Result with CodecError
pub type CodecResult<T> = std::result::Result<T, CodecError>;
