//! Errors reported by the selection structures.

use thiserror::Error;

/// Construction failures.
///
/// Query methods never return this type: an invalid `n` yields `None` and
/// leaves the structure untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("capacity must be a positive number, got {capacity}")]
    InvalidCapacity { capacity: usize },
}
