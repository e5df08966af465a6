//! Keybindings and autocommands registered with the host.

use std::fmt;

/// Editor mode a keybinding applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Normal mode (`n`).
    Normal,
    /// Insert mode (`i`).
    Insert,
    /// Visual and select mode (`v`).
    Visual,
    /// Terminal mode (`t`).
    Terminal,
    /// Command-line mode (`c`).
    CommandLine,
}

impl Mode {
    /// The host's single-letter mode code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Normal => "n",
            Self::Insert => "i",
            Self::Visual => "v",
            Self::Terminal => "t",
            Self::CommandLine => "c",
        }
    }

    /// Parse a single-letter mode code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(Self::Normal),
            "i" => Some(Self::Insert),
            "v" => Some(Self::Visual),
            "t" => Some(Self::Terminal),
            "c" => Some(Self::CommandLine),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A non-recursive, silent key mapping.
///
/// `noremap` and `silent` are always on; the host adapter applies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    /// Mode the mapping is active in.
    pub mode: Mode,
    /// Left-hand side: the key sequence typed by the user.
    pub lhs: String,
    /// Right-hand side: what the key sequence expands to.
    pub rhs: String,
}

impl KeyBinding {
    /// Create a new keybinding.
    pub fn new(mode: Mode, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            mode,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Check that both sides are non-empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.lhs.is_empty() {
            return Err(format!("{} mapping has an empty lhs", self.mode));
        }
        if self.rhs.is_empty() {
            return Err(format!("{} mapping '{}' has an empty rhs", self.mode, self.lhs));
        }
        Ok(())
    }
}

/// An autocommand that runs an ex command when an editor event fires.
///
/// The command is registered inside a named group; `clear_group` asks the
/// host to drop earlier commands of that group first, so re-sourcing the
/// configuration does not register duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoCommand {
    /// Event name (e.g. `"TextYankPost"`).
    pub event: String,
    /// Human-readable description shown by the host.
    pub description: String,
    /// Autocommand group name.
    pub group: String,
    /// Whether to clear the group before registering.
    pub clear_group: bool,
    /// Ex command executed when the event fires.
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_codes_round_trip() {
        for mode in [
            Mode::Normal,
            Mode::Insert,
            Mode::Visual,
            Mode::Terminal,
            Mode::CommandLine,
        ] {
            assert_eq!(Mode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(Mode::from_code("x"), None);
    }

    #[test]
    fn keybinding_rejects_empty_sides() {
        assert!(KeyBinding::new(Mode::Normal, "", "gj").validate().is_err());
        let err = KeyBinding::new(Mode::Normal, "j", "").validate().unwrap_err();
        assert!(err.contains("'j'"));
        assert!(KeyBinding::new(Mode::Normal, "j", "gj").validate().is_ok());
    }
}
