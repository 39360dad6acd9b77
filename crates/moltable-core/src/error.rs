use thiserror::Error;

/// Errors raised by the connectivity and coordinate containers.
///
/// These represent contract violations by the caller, not transient
/// failures; there is no retry semantics. Mutating operations are not
/// transactional, so a failed insert or remove must be treated as fatal
/// to that operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: isize, size: usize },

    #[error("wrong size for array ({actual} != {expected})")]
    SizeMismatch { expected: usize, actual: usize },
}
