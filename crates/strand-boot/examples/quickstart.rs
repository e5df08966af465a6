//! Strand Quickstart: a dry run of the stock bootstrap sequence.
//!
//! Demonstrates:
//!   1. Implementing the `Host` trait for an editor
//!   2. Tweaking the stock `BootConfig`
//!   3. Running the sequence and reading the `BootReport`
//!
//! The host here only prints what a real editor binding would do. Shell
//! commands are echoed, never executed.
//!
//! Run with:
//!   cargo run --example quickstart

use std::path::Path;

use strand_boot::{BootConfig, Bootstrap};
use strand_core::{AutoCommand, Host, HostError, KeyBinding, OptionValue};

// ─── Host: prints every call ────────────────────────────────────

struct DryRunHost {
    data_dir: String,
}

impl Host for DryRunHost {
    fn user_data_subpath(&self, suffix: &str) -> Result<String, HostError> {
        Ok(format!("{}{}", self.data_dir, suffix))
    }

    fn default_search_path(&self) -> Result<String, HostError> {
        Ok("/usr/share/nvim/runtime".to_string())
    }

    fn path_is_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn run_shell(&mut self, commandline: &str) {
        println!("  $ {commandline}");
    }

    fn set_global(&mut self, name: &str, value: &OptionValue) -> Result<(), HostError> {
        println!("  let g:{name} = {value}");
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &OptionValue) -> Result<(), HostError> {
        match value {
            OptionValue::Bool(true) => println!("  set {name}"),
            OptionValue::Bool(false) => println!("  set no{name}"),
            _ => println!("  set {name}={value}"),
        }
        Ok(())
    }

    fn set_keybinding(&mut self, binding: &KeyBinding) -> Result<(), HostError> {
        println!(
            "  {}noremap <silent> {} {}",
            binding.mode.code(),
            binding.lhs,
            binding.rhs
        );
        Ok(())
    }

    fn register_autocommand(&mut self, autocmd: &AutoCommand) -> Result<(), HostError> {
        println!(
            "  autocmd {} {} -> {}",
            autocmd.group, autocmd.event, autocmd.command
        );
        Ok(())
    }

    fn run_command(&mut self, command: &str) -> Result<(), HostError> {
        println!("  :{command}");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Strand Quickstart ===\n");

    // 1. Start from the stock configuration and adjust a couple of options.
    let mut config = BootConfig::default();
    config.set_option("background", "dark");
    config.set_option("scrolloff", 8i64);

    // 2. Point the host at a data directory that (most likely) has no
    //    plugin manager, so the install command is shown too.
    let mut host = DryRunHost {
        data_dir: std::env::temp_dir()
            .join("strand-quickstart")
            .display()
            .to_string(),
    };

    // 3. Run.
    let report = Bootstrap::new(config)?.run(&mut host)?;

    println!("\nruntimepath = {}", report.runtime_path);
    println!("package     = {}", report.package_path);
    println!(
        "installed manager: {}, options: {}, plugins: {}, keybindings: {}",
        report.manager_installed,
        report.options_set,
        report.plugins_declared,
        report.keybindings_set
    );
    Ok(())
}
