//! Error types for pklite

use thiserror::Error;

/// Result type alias using [`UnpackError`]
pub type Result<T> = std::result::Result<T, UnpackError>;

/// Why a stream was judged corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// A prefix tree had no child for the bit that was read.
    MissingBranch { bit: bool },
    /// A back-reference points before the start of the output.
    OffsetOutOfRange { offset: usize, written: usize },
}

impl std::fmt::Display for Corruption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Corruption::MissingBranch { bit } => {
                write!(f, "no branch for bit {} in prefix tree", u8::from(*bit))
            }
            Corruption::OffsetOutOfRange { offset, written } => write!(
                f,
                "back-reference offset {offset} with only {written} bytes written"
            ),
        }
    }
}

/// Decode failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnpackError {
    /// A bit or byte was requested past the end of the compressed input
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEndOfInput { position: usize },

    /// The bitstream does not describe a valid instruction
    #[error("corrupt stream: {0}")]
    CorruptStream(Corruption),

    /// The output would exceed the caller-supplied capacity
    #[error("output exceeds capacity of {capacity} bytes")]
    BufferOverflow { capacity: usize },
}

impl UnpackError {
    /// True when retrying with a larger capacity can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UnpackError::BufferOverflow { .. })
    }
}

impl From<Corruption> for UnpackError {
    fn from(corruption: Corruption) -> Self {
        UnpackError::CorruptStream(corruption)
    }
}
