use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type VecResult<T> = core::result::Result<T, VecError>;

/// Everything that can go wrong while working with a [`FixedWidthVector`](crate::FixedWidthVector).
///
/// No operation leaves the container half modified when it returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VecError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("element must be {expected} bytes wide, got {found}")]
    WidthMismatch { expected: usize, found: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("vector is empty")]
    Empty,
    #[error("failed to allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },
    #[error("map transform failed at index {index}")]
    TransformFailed { index: usize },
}
