//! Error types reported by the editor host.

use std::error::Error;
use std::fmt;

/// Errors returned by a [`Host`](crate::Host) implementation.
///
/// The bootstrap treats every host error as fatal to the sequence; the
/// variants only distinguish what went wrong for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host received the call but refused it (unknown option name,
    /// malformed mapping, interpreter error).
    Rejected {
        /// Name of the host call that failed (e.g. `"set_option"`).
        call: &'static str,
        /// Host-supplied description of the failure.
        reason: String,
    },
    /// The host cannot service this call at all (e.g. no user data
    /// directory is known).
    Unavailable {
        /// Name of the host call that failed.
        call: &'static str,
    },
}

impl HostError {
    /// Shorthand for [`HostError::Rejected`].
    pub fn rejected(call: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            call,
            reason: reason.into(),
        }
    }

    /// Name of the host call that produced this error.
    pub fn call(&self) -> &'static str {
        match self {
            Self::Rejected { call, .. } | Self::Unavailable { call } => call,
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { call, reason } => write!(f, "host rejected {call}: {reason}"),
            Self::Unavailable { call } => write!(f, "host cannot service {call}"),
        }
    }
}

impl Error for HostError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_call() {
        let e = HostError::rejected("set_option", "unknown option 'nmber'");
        assert_eq!(
            e.to_string(),
            "host rejected set_option: unknown option 'nmber'"
        );
        assert_eq!(e.call(), "set_option");
    }

    #[test]
    fn unavailable_display() {
        let e = HostError::Unavailable {
            call: "user_data_subpath",
        };
        assert_eq!(e.to_string(), "host cannot service user_data_subpath");
        assert_eq!(e.call(), "user_data_subpath");
    }
}
