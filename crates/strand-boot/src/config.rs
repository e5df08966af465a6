//! Bootstrap configuration, validation, and error types.
//!
//! [`BootConfig`] is the input to [`Bootstrap::new`](crate::Bootstrap::new).
//! [`validate()`](BootConfig::validate) checks structural invariants before
//! any arena is allocated or any host call is made.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use strand_arena::{ArenaConfig, ArenaError};
use strand_core::{AutoCommand, KeyBinding, OptionValue, PluginSpec};

// ── PluginManagerConfig ────────────────────────────────────────────

/// Where the plugin manager lives and how to fetch it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginManagerConfig {
    /// Directory of the manager, relative to the package path.
    /// Default: `pack/deps/opt/mini.nvim`.
    pub install_dir: String,
    /// Shell command prefix that clones the manager. The full target path
    /// is appended directly, so the prefix must end with a separator.
    pub install_command: String,
    /// Interpreter module whose `setup` receives the package path.
    /// Default: `mini.deps`.
    pub setup_module: String,
    /// Interpreter function used to declare each plugin.
    /// Default: `MiniDeps.add`.
    pub add_function: String,
}

impl PluginManagerConfig {
    /// Default manager directory under the package path.
    pub const DEFAULT_INSTALL_DIR: &'static str = "pack/deps/opt/mini.nvim";
    /// Default clone command prefix.
    pub const DEFAULT_INSTALL_COMMAND: &'static str =
        "git clone --filter=blob:none https://github.com/nvim-mini/mini.nvim ";
}

impl Default for PluginManagerConfig {
    fn default() -> Self {
        Self {
            install_dir: Self::DEFAULT_INSTALL_DIR.to_string(),
            install_command: Self::DEFAULT_INSTALL_COMMAND.to_string(),
            setup_module: "mini.deps".to_string(),
            add_function: "MiniDeps.add".to_string(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BootConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena configuration is invalid.
    Arena(ArenaError),
    /// `package_subdir` is empty.
    EmptyPackageSubdir,
    /// The plugin manager's `install_dir` is empty.
    EmptyManagerDir,
    /// The plugin manager's `install_command` is empty.
    EmptyInstallCommand,
    /// The install command alone does not fit in the arena.
    InstallCommandTooLong {
        /// Length of the command prefix in bytes.
        len: usize,
        /// Configured arena capacity in bytes.
        capacity: usize,
    },
    /// An option or global has an empty name.
    EmptyOptionName,
    /// A keybinding failed validation.
    InvalidKeyBinding {
        /// Description of the validation failure.
        reason: String,
    },
    /// A plugin declaration failed validation.
    InvalidPlugin {
        /// Description of the validation failure.
        reason: String,
    },
    /// An autocommand is missing its event, group, or command.
    InvalidAutoCommand {
        /// Description of the validation failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::EmptyPackageSubdir => write!(f, "package_subdir must not be empty"),
            Self::EmptyManagerDir => write!(f, "plugin manager install_dir must not be empty"),
            Self::EmptyInstallCommand => {
                write!(f, "plugin manager install_command must not be empty")
            }
            Self::InstallCommandTooLong { len, capacity } => {
                write!(
                    f,
                    "install_command is {len} bytes, arena capacity is {capacity} bytes"
                )
            }
            Self::EmptyOptionName => write!(f, "option name must not be empty"),
            Self::InvalidKeyBinding { reason } => write!(f, "invalid keybinding: {reason}"),
            Self::InvalidPlugin { reason } => write!(f, "invalid plugin: {reason}"),
            Self::InvalidAutoCommand { reason } => write!(f, "invalid autocommand: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── BootConfig ─────────────────────────────────────────────────────

/// Complete configuration for one bootstrap run.
///
/// `Default` reproduces the stock editor setup (see [`crate::defaults`]).
/// Use [`BootConfig::minimal`] for an empty table to fill by hand.
#[derive(Clone, Debug)]
pub struct BootConfig {
    /// Staging arena sizing.
    pub arena: ArenaConfig,
    /// Suffix joined onto the host's user data directory to form the
    /// package path. Default: `/site/`.
    pub package_subdir: String,
    /// Plugin manager location and install command.
    pub plugin_manager: PluginManagerConfig,
    /// Global variables, applied before options (`mapleader`, ...).
    pub globals: IndexMap<String, OptionValue>,
    /// Editor options in application order.
    pub options: IndexMap<String, OptionValue>,
    /// Ex commands run after options, before the plugin manager is set up.
    pub commands: Vec<String>,
    /// Interpreter snippets run right after the plugin manager is set up,
    /// for modules that ship with the manager itself.
    pub snippets: Vec<String>,
    /// Plugins declared with the plugin manager, in order.
    pub plugins: Vec<PluginSpec>,
    /// Ex commands run after every plugin is declared (highlights, ...).
    pub post_commands: Vec<String>,
    /// Keybindings registered after plugins.
    pub keybindings: Vec<KeyBinding>,
    /// Autocommands registered last.
    pub autocommands: Vec<AutoCommand>,
}

impl BootConfig {
    /// Default package subdirectory under the user data directory.
    pub const DEFAULT_PACKAGE_SUBDIR: &'static str = "/site/";

    /// A configuration with default paths and no options, bindings,
    /// commands, or plugins.
    pub fn minimal() -> Self {
        Self {
            arena: ArenaConfig::default(),
            package_subdir: Self::DEFAULT_PACKAGE_SUBDIR.to_string(),
            plugin_manager: PluginManagerConfig::default(),
            globals: IndexMap::new(),
            options: IndexMap::new(),
            commands: Vec::new(),
            snippets: Vec::new(),
            plugins: Vec::new(),
            post_commands: Vec::new(),
            keybindings: Vec::new(),
            autocommands: Vec::new(),
        }
    }

    /// Set an option, returning the value it replaced.
    ///
    /// A replaced option keeps its original position in the order.
    pub fn set_option(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.options.insert(name.into(), value.into())
    }

    /// Set a global variable, returning the value it replaced.
    pub fn set_global(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.globals.insert(name.into(), value.into())
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Arena must be creatable.
        self.arena.validate()?;
        // 2. Paths and install command must be non-empty.
        if self.package_subdir.is_empty() {
            return Err(ConfigError::EmptyPackageSubdir);
        }
        let manager = &self.plugin_manager;
        if manager.install_dir.is_empty() {
            return Err(ConfigError::EmptyManagerDir);
        }
        if manager.install_command.trim().is_empty() {
            return Err(ConfigError::EmptyInstallCommand);
        }
        // 3. The command prefix is spliced into the arena, so it must fit
        //    with room left for at least one path byte.
        if manager.install_command.len() >= self.arena.capacity {
            return Err(ConfigError::InstallCommandTooLong {
                len: manager.install_command.len(),
                capacity: self.arena.capacity,
            });
        }
        // 4. Named entries.
        if self
            .globals
            .keys()
            .chain(self.options.keys())
            .any(|name| name.is_empty())
        {
            return Err(ConfigError::EmptyOptionName);
        }
        for binding in &self.keybindings {
            binding
                .validate()
                .map_err(|reason| ConfigError::InvalidKeyBinding { reason })?;
        }
        for plugin in &self.plugins {
            plugin
                .validate()
                .map_err(|reason| ConfigError::InvalidPlugin { reason })?;
        }
        for autocmd in &self.autocommands {
            if autocmd.event.is_empty() || autocmd.group.is_empty() || autocmd.command.is_empty()
            {
                return Err(ConfigError::InvalidAutoCommand {
                    reason: format!(
                        "autocommand '{}' needs an event, a group, and a command",
                        autocmd.description
                    ),
                });
            }
        }
        Ok(())
    }
}
