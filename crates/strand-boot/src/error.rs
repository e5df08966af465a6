//! Errors that abort the bootstrap sequence.

use std::error::Error;
use std::fmt;

use strand_arena::ArenaError;
use strand_core::HostError;

use crate::config::ConfigError;

/// Errors returned by [`Bootstrap::run`](crate::Bootstrap::run).
///
/// Every error is fatal to the sequence: configuration already applied to
/// the host stays applied, nothing after the failing step runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Staging a string overflowed the arena, or the arena could not be
    /// created.
    Arena(ArenaError),
    /// The host rejected a call.
    Host(HostError),
    /// The host returned an empty path.
    EmptyPath {
        /// Which path was empty (`"package path"`, `"default search path"`).
        which: &'static str,
    },
    /// Staged bytes could not be read back as UTF-8 text.
    ///
    /// Also returned when the requested range lies outside the staged
    /// bytes, so nothing could be read back at all.
    NotUtf8 {
        /// What was being read back from the arena.
        what: &'static str,
    },
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Host(e) => write!(f, "host: {e}"),
            Self::EmptyPath { which } => write!(f, "host returned an empty {which}"),
            Self::NotUtf8 { what } => {
                write!(f, "staged {what} is out of range or not valid UTF-8")
            }
        }
    }
}

impl Error for BootError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Host(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BootError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for BootError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<HostError> for BootError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}
