//! The host adapter trait.

use crate::binding::{AutoCommand, KeyBinding};
use crate::error::HostError;
use crate::value::OptionValue;

/// The editor host's configuration surface.
///
/// Implemented by whatever embeds the bootstrap: a binding to the real
/// editor runtime in production, a recording mock in tests. The bootstrap
/// only ever hands the host opaque strings it has staged in its arena.
pub trait Host {
    /// Join the host's user data directory with `suffix`.
    fn user_data_subpath(&self, suffix: &str) -> Result<String, HostError>;

    /// The host's default runtime search path (comma-separated).
    fn default_search_path(&self) -> Result<String, HostError>;

    /// Whether `path` names an existing directory.
    fn path_is_directory(&self, path: &str) -> bool;

    /// Run a shell command line to completion.
    ///
    /// Fire-and-forget: the exit status is not reported, and a failed
    /// command is only noticed later when the installed files are missing.
    fn run_shell(&mut self, commandline: &str);

    /// Set a global variable (e.g. `mapleader`).
    fn set_global(&mut self, name: &str, value: &OptionValue) -> Result<(), HostError>;

    /// Set an editor option.
    fn set_option(&mut self, name: &str, value: &OptionValue) -> Result<(), HostError>;

    /// Register a non-recursive, silent keybinding.
    fn set_keybinding(&mut self, binding: &KeyBinding) -> Result<(), HostError>;

    /// Register an autocommand.
    fn register_autocommand(&mut self, autocmd: &AutoCommand) -> Result<(), HostError>;

    /// Execute an ex command line (which may itself be `lua ...`).
    fn run_command(&mut self, command: &str) -> Result<(), HostError>;
}
