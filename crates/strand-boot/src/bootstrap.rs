//! The bootstrap sequence.
//!
//! [`Bootstrap`] owns the validated configuration and one staging
//! [`Arena`]. [`run`](Bootstrap::run) walks the phases in a fixed order:
//!
//! 1. runtime path: `<default search path>,<package path>`
//! 2. plugin manager: clone it if its directory is missing
//! 3. globals, options, ex commands
//! 4. plugin manager setup, bundled snippets, plugin declarations
//! 5. post commands, keybindings, autocommands
//!
//! The arena is reused for every staged string and destroyed when the
//! run ends, on success or error.

use std::ops::Range;

use strand_arena::Arena;
use strand_core::{Host, OptionValue};
use tracing::{debug, info, warn};

use crate::config::BootConfig;
use crate::error::BootError;
use crate::lua;

/// Summary of a completed bootstrap run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootReport {
    /// The runtime path handed to the host.
    pub runtime_path: String,
    /// The package path the plugin manager was pointed at.
    pub package_path: String,
    /// Whether the install command was issued.
    pub manager_installed: bool,
    /// Number of globals set.
    pub globals_set: usize,
    /// Number of options set (including `runtimepath`).
    pub options_set: usize,
    /// Number of ex commands and snippets run.
    pub commands_run: usize,
    /// Number of plugins declared.
    pub plugins_declared: usize,
    /// Number of keybindings registered.
    pub keybindings_set: usize,
    /// Number of autocommands registered.
    pub autocommands_registered: usize,
}

/// One bootstrap run: a validated config plus its staging arena.
#[derive(Debug)]
pub struct Bootstrap {
    config: BootConfig,
    arena: Arena,
}

impl Bootstrap {
    /// Validate `config` and allocate the staging arena.
    pub fn new(config: BootConfig) -> Result<Self, BootError> {
        config.validate()?;
        let arena = Arena::with_config(&config.arena)?;
        Ok(Self { config, arena })
    }

    /// The configuration this run will apply.
    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// Apply the configuration to `host`.
    ///
    /// Stops at the first error. The arena is released either way.
    pub fn run<H: Host + ?Sized>(mut self, host: &mut H) -> Result<BootReport, BootError> {
        info!(capacity = self.arena.capacity(), "bootstrap starting");
        let mut report = BootReport::default();

        let package = self.stage_runtime_path(host, &mut report)?;
        let package = self.ensure_plugin_manager(host, package, &mut report)?;
        report.package_path = staged_str(&self.arena, package, "package path")?.to_owned();

        self.apply_settings(host, &mut report)?;
        self.declare_plugins(host, &mut report)?;
        self.register_bindings(host, &mut report)?;

        self.arena.destroy();
        info!(
            options = report.options_set,
            plugins = report.plugins_declared,
            keybindings = report.keybindings_set,
            "bootstrap complete"
        );
        Ok(report)
    }

    /// Stage `<default search path>,<package path>` and set `runtimepath`.
    ///
    /// Returns the byte range of the package path inside the arena.
    fn stage_runtime_path<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        report: &mut BootReport,
    ) -> Result<Range<usize>, BootError> {
        let package_path = host.user_data_subpath(&self.config.package_subdir)?;
        if package_path.is_empty() {
            return Err(BootError::EmptyPath {
                which: "package path",
            });
        }
        let search_path = host.default_search_path()?;
        if search_path.is_empty() {
            return Err(BootError::EmptyPath {
                which: "default search path",
            });
        }

        self.arena.clear();
        self.arena.append_str(&search_path)?;
        self.arena.append_str(",")?;
        let start = self.arena.len();
        self.arena.append_str(&package_path)?;
        let package = start..self.arena.len();

        let runtime_path = staged_str(&self.arena, 0..self.arena.len(), "runtime path")?;
        debug!(len = runtime_path.len(), "setting runtimepath");
        host.set_option("runtimepath", &OptionValue::Str(runtime_path.to_owned()))?;
        report.runtime_path = runtime_path.to_owned();
        report.options_set += 1;
        Ok(package)
    }

    /// Clone the plugin manager if `<package path><install dir>` is missing.
    ///
    /// On install, everything before the package path is replaced by the
    /// install command, so the arena reads `<command><package><dir>` and is
    /// passed to the shell as-is. The manager directory is cut off again
    /// before returning; the returned range tracks where the package path
    /// now sits.
    fn ensure_plugin_manager<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        package: Range<usize>,
        report: &mut BootReport,
    ) -> Result<Range<usize>, BootError> {
        let manager = &self.config.plugin_manager;
        self.arena.append_str(&manager.install_dir)?;

        let manager_path = staged_str(&self.arena, package.start..self.arena.len(), "manager path")?;
        if host.path_is_directory(manager_path) {
            debug!(path = %manager_path, "plugin manager present");
            self.arena.shrink(manager.install_dir.len());
            return Ok(package);
        }

        info!(path = %manager_path, "plugin manager missing, installing");
        let command = manager.install_command.as_bytes();
        self.arena.splice(0, package.start, command)?;
        let package = command.len()..command.len() + package.len();

        let commandline = staged_str(&self.arena, 0..self.arena.len(), "install command")?;
        host.run_shell(commandline);
        report.manager_installed = true;

        let manager_path = staged_str(&self.arena, package.start..self.arena.len(), "manager path")?;
        if !host.path_is_directory(manager_path) {
            warn!(path = %manager_path, "plugin manager still missing after install");
        }

        self.arena.shrink(manager.install_dir.len());
        Ok(package)
    }

    /// Globals, options, and ex commands.
    fn apply_settings<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        report: &mut BootReport,
    ) -> Result<(), BootError> {
        for (name, value) in &self.config.globals {
            debug!(name = %name, kind = value.kind(), "set global");
            host.set_global(name, value)?;
            report.globals_set += 1;
        }
        for (name, value) in &self.config.options {
            debug!(name = %name, kind = value.kind(), "set option");
            host.set_option(name, value)?;
            report.options_set += 1;
        }
        for command in &self.config.commands {
            debug!(command = %command, "run command");
            host.run_command(command)?;
            report.commands_run += 1;
        }
        Ok(())
    }

    /// Plugin manager setup, bundled snippets, and plugin declarations.
    fn declare_plugins<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        report: &mut BootReport,
    ) -> Result<(), BootError> {
        let manager = &self.config.plugin_manager;

        self.arena.clear();
        lua::compose_manager_setup(&mut self.arena, &manager.setup_module, &report.package_path)?;
        let snippet = staged_str(&self.arena, 0..self.arena.len(), "manager setup")?;
        debug!(module = %manager.setup_module, "set up plugin manager");
        host.run_command(snippet)?;
        report.commands_run += 1;

        for snippet in &self.config.snippets {
            debug!(len = snippet.len(), "run bundled snippet");
            host.run_command(snippet)?;
            report.commands_run += 1;
        }

        for plugin in &self.config.plugins {
            self.arena.clear();
            lua::compose_plugin_add(&mut self.arena, &manager.add_function, plugin)?;
            let snippet = staged_str(&self.arena, 0..self.arena.len(), "plugin declaration")?;
            debug!(source = %plugin.source, len = snippet.len(), "declare plugin");
            host.run_command(snippet)?;
            report.plugins_declared += 1;

            for setup in &plugin.setup {
                debug!(source = %plugin.source, len = setup.len(), "run plugin setup");
                host.run_command(setup)?;
                report.commands_run += 1;
            }
        }
        self.arena.clear();

        for command in &self.config.post_commands {
            debug!(command = %command, "run post command");
            host.run_command(command)?;
            report.commands_run += 1;
        }
        Ok(())
    }

    /// Keybindings, then autocommands.
    fn register_bindings<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        report: &mut BootReport,
    ) -> Result<(), BootError> {
        for binding in &self.config.keybindings {
            debug!(mode = binding.mode.code(), lhs = %binding.lhs, "set keybinding");
            host.set_keybinding(binding)?;
            report.keybindings_set += 1;
        }
        for autocmd in &self.config.autocommands {
            debug!(event = %autocmd.event, group = %autocmd.group, "register autocommand");
            host.register_autocommand(autocmd)?;
            report.autocommands_registered += 1;
        }
        Ok(())
    }
}

/// Read a staged range back as text.
fn staged_str<'a>(
    arena: &'a Arena,
    range: Range<usize>,
    what: &'static str,
) -> Result<&'a str, BootError> {
    let bytes = arena.slice(range).ok_or(BootError::NotUtf8 { what })?;
    std::str::from_utf8(bytes).map_err(|_| BootError::NotUtf8 { what })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use strand_test_utils::RecordingHost;

    fn host() -> RecordingHost {
        RecordingHost::new("/usr/share/nvim/runtime", "/home/u/.local/share/nvim")
    }

    #[test]
    fn runtime_path_joins_search_and_package_paths() {
        let mut host = host();
        let report = Bootstrap::new(BootConfig::minimal())
            .unwrap()
            .run(&mut host)
            .unwrap();
        assert_eq!(
            report.runtime_path,
            "/usr/share/nvim/runtime,/home/u/.local/share/nvim/site/"
        );
        assert_eq!(report.package_path, "/home/u/.local/share/nvim/site/");
    }

    #[test]
    fn empty_package_path_aborts() {
        let mut host = RecordingHost::new("/rt", "");
        host.package_path_override = Some(String::new());
        let err = Bootstrap::new(BootConfig::minimal())
            .unwrap()
            .run(&mut host)
            .unwrap_err();
        assert_eq!(
            err,
            BootError::EmptyPath {
                which: "package path"
            }
        );
    }

    #[test]
    fn arena_overflow_surfaces_as_error() {
        let mut cfg = BootConfig::minimal();
        cfg.arena.capacity = 80;
        let mut host = RecordingHost::new(&"r".repeat(100), "/data");
        let err = Bootstrap::new(cfg).unwrap().run(&mut host).unwrap_err();
        assert!(matches!(err, BootError::Arena(_)));
        assert!(host.options.is_empty());
    }

    /// Counts `DEBUG` events; spans are ignored.
    struct DebugCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for DebugCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::DEBUG {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn every_host_call_is_logged() {
        let mut host = host().with_directory(
            "/home/u/.local/share/nvim/site/pack/deps/opt/mini.nvim",
        );
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(DebugCounter(Arc::clone(&count)), || {
            Bootstrap::new(BootConfig::default())
                .unwrap()
                .run(&mut host)
                .unwrap();
        });
        // One extra event for the "plugin manager present" check.
        assert_eq!(count.load(Ordering::Relaxed), host.log.len() + 1);
    }

    #[test]
    fn staged_str_rejects_out_of_range() {
        let arena = Arena::new(4).unwrap();
        assert!(matches!(
            staged_str(&arena, 0..2, "x"),
            Err(BootError::NotUtf8 { what: "x" })
        ));
    }
}
