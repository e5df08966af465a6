//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a fixed-capacity [`Arena`](crate::Arena).
///
/// The capacity is the only tunable: arenas never grow, so it must cover
/// the longest byte sequence the owner will stage at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the backing region in bytes.
    ///
    /// Default: 16_384 (four 4 KiB pages), enough for the longest runtime
    /// path or install command line staged at once.
    pub capacity: usize,
}

impl ArenaConfig {
    /// Default capacity in bytes.
    pub const DEFAULT_CAPACITY: usize = 4096 * 4;

    /// Create a config with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject configurations that can never produce an arena.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.capacity == 0 {
            return Err(ArenaError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
