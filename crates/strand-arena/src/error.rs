//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Creation failures ([`ZeroCapacity`](Self::ZeroCapacity),
/// [`AllocationFailed`](Self::AllocationFailed)) leave the caller without
/// an arena. Every other variant is returned by an operation that
/// performed no mutation, so the arena is still usable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// An arena was requested with a capacity of zero bytes.
    ZeroCapacity,
    /// The backing region could not be allocated.
    AllocationFailed {
        /// Capacity that was requested, in bytes.
        capacity: usize,
    },
    /// `alloc` was called with a size of zero.
    ZeroSizedAlloc,
    /// The operation needs more bytes than the arena has free.
    CapacityExceeded {
        /// Number of additional bytes the operation needed.
        requested: usize,
        /// Free bytes at the time of the call.
        available: usize,
    },
    /// A splice range is empty, reversed, or extends past the logical length.
    InvalidRange {
        /// Inclusive lower bound of the range.
        bottom: usize,
        /// Exclusive upper bound of the range.
        top: usize,
        /// Logical length at the time of the call.
        length: usize,
    },
    /// A `Display` implementation reported an error during `append_fmt`.
    FormatFailed,
}

impl ArenaError {
    /// Whether the arena is still usable after this error.
    ///
    /// Returns `false` only for creation failures.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ZeroCapacity | Self::AllocationFailed { .. })
    }
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "arena capacity must be at least one byte"),
            Self::AllocationFailed { capacity } => {
                write!(f, "failed to allocate {capacity} byte arena")
            }
            Self::ZeroSizedAlloc => write!(f, "zero-sized arena allocation"),
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {available} bytes free"
                )
            }
            Self::InvalidRange {
                bottom,
                top,
                length,
            } => {
                write!(
                    f,
                    "invalid range {bottom}..{top} for arena of length {length}"
                )
            }
            Self::FormatFailed => write!(f, "formatter error while writing to arena"),
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_failures_are_fatal() {
        assert!(!ArenaError::ZeroCapacity.is_recoverable());
        assert!(!ArenaError::AllocationFailed { capacity: 8 }.is_recoverable());
        assert!(ArenaError::ZeroSizedAlloc.is_recoverable());
        assert!(ArenaError::CapacityExceeded {
            requested: 2,
            available: 1
        }
        .is_recoverable());
        assert!(ArenaError::InvalidRange {
            bottom: 1,
            top: 1,
            length: 4
        }
        .is_recoverable());
    }

    #[test]
    fn display_includes_bounds() {
        let e = ArenaError::InvalidRange {
            bottom: 4,
            top: 2,
            length: 8,
        };
        assert_eq!(e.to_string(), "invalid range 4..2 for arena of length 8");
    }
}
