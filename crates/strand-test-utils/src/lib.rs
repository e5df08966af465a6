//! Test utilities and mock types for Strand development.
//!
//! Provides [`RecordingHost`], an in-memory implementation of
//! [`Host`] that records every call, and a few
//! [`fixtures`] for building small configurations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use strand_core::{AutoCommand, Host, HostError, KeyBinding, OptionValue};

/// Mock host that records every call.
///
/// Paths are plain strings: the user data directory is joined with the
/// requested suffix by concatenation, and directories "exist" when they
/// are in [`directories`](RecordingHost::directories). With
/// [`install_creates_directory`](RecordingHost::install_creates_directory)
/// set, a shell call adds its last argument (the clone target) to the set,
/// mimicking a successful `git clone`.
pub struct RecordingHost {
    pub search_path: String,
    pub data_dir: String,
    /// Returned from `user_data_subpath` instead of `data_dir + suffix`.
    pub package_path_override: Option<String>,
    pub directories: HashSet<String>,
    pub install_creates_directory: bool,
    /// Name of a host call to reject with [`HostError::Rejected`].
    pub reject: Option<&'static str>,

    pub shell_calls: Vec<String>,
    pub globals: Vec<(String, OptionValue)>,
    pub options: Vec<(String, OptionValue)>,
    pub keybindings: Vec<KeyBinding>,
    pub autocommands: Vec<AutoCommand>,
    pub commands: Vec<String>,
    /// Names of every call in order, for phase-order assertions.
    pub log: Vec<&'static str>,
}

impl RecordingHost {
    pub fn new(search_path: &str, data_dir: &str) -> Self {
        Self {
            search_path: search_path.to_string(),
            data_dir: data_dir.to_string(),
            package_path_override: None,
            directories: HashSet::new(),
            install_creates_directory: true,
            reject: None,
            shell_calls: Vec::new(),
            globals: Vec::new(),
            options: Vec::new(),
            keybindings: Vec::new(),
            autocommands: Vec::new(),
            commands: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Mark `path` as an existing directory.
    pub fn with_directory(mut self, path: impl Into<String>) -> Self {
        self.directories.insert(path.into());
        self
    }

    /// Reject every call named `call`.
    pub fn rejecting(mut self, call: &'static str) -> Self {
        self.reject = Some(call);
        self
    }

    /// Look up the last value set for option `name`.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Position of the first call named `call` in the log.
    pub fn first_call(&self, call: &str) -> Option<usize> {
        self.log.iter().position(|&c| c == call)
    }

    fn record(&mut self, call: &'static str) -> Result<(), HostError> {
        self.log.push(call);
        if self.reject == Some(call) {
            return Err(HostError::rejected(call, "rejected by test host"));
        }
        Ok(())
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new("/usr/share/nvim/runtime", "/home/user/.local/share/nvim")
    }
}

impl Host for RecordingHost {
    fn user_data_subpath(&self, suffix: &str) -> Result<String, HostError> {
        if self.reject == Some("user_data_subpath") {
            return Err(HostError::Unavailable {
                call: "user_data_subpath",
            });
        }
        Ok(match &self.package_path_override {
            Some(path) => path.clone(),
            None => format!("{}{}", self.data_dir, suffix),
        })
    }

    fn default_search_path(&self) -> Result<String, HostError> {
        if self.reject == Some("default_search_path") {
            return Err(HostError::Unavailable {
                call: "default_search_path",
            });
        }
        Ok(self.search_path.clone())
    }

    fn path_is_directory(&self, path: &str) -> bool {
        self.directories.contains(path)
    }

    fn run_shell(&mut self, commandline: &str) {
        self.log.push("run_shell");
        self.shell_calls.push(commandline.to_string());
        if self.install_creates_directory {
            if let Some(target) = commandline.split_whitespace().last() {
                self.directories.insert(target.to_string());
            }
        }
    }

    fn set_global(&mut self, name: &str, value: &OptionValue) -> Result<(), HostError> {
        self.record("set_global")?;
        self.globals.push((name.to_string(), value.clone()));
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> Result<(), HostError> {
        self.record("set_option")?;
        self.options.push((name.to_string(), value.clone()));
        Ok(())
    }

    fn set_keybinding(&mut self, binding: &KeyBinding) -> Result<(), HostError> {
        self.record("set_keybinding")?;
        self.keybindings.push(binding.clone());
        Ok(())
    }

    fn register_autocommand(&mut self, autocmd: &AutoCommand) -> Result<(), HostError> {
        self.record("register_autocommand")?;
        self.autocommands.push(autocmd.clone());
        Ok(())
    }

    fn run_command(&mut self, command: &str) -> Result<(), HostError> {
        self.record("run_command")?;
        self.commands.push(command.to_string());
        Ok(())
    }
}
