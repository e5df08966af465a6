//! Editor bootstrap sequence built on the Strand arena.
//!
//! Provides [`Bootstrap`], which takes a validated [`BootConfig`] and
//! applies it to a [`Host`](strand_core::Host): it assembles the runtime
//! path, installs the plugin manager when missing, sets globals and
//! options, declares plugins, and registers keybindings and autocommands.
//! Every dynamically built string is staged in one fixed-capacity
//! [`Arena`](strand_arena::Arena).
//!
//! Progress is reported through `tracing`; no subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod defaults;
pub mod error;
pub mod lua;

pub use bootstrap::{BootReport, Bootstrap};
pub use config::{BootConfig, ConfigError, PluginManagerConfig};
pub use error::BootError;
