//! Strand: a fixed-capacity string arena and the editor bootstrap built on it.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strand sub-crates. For most users, adding `strand` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! let mut arena = Arena::new(128).unwrap();
//! arena.append_str("/usr/share/nvim/runtime,").unwrap();
//! let package = arena.len();
//! arena.append_str("/home/u/.local/share/nvim/site/").unwrap();
//!
//! // Replace everything before the package path with a command prefix.
//! arena.splice(0, package, b"git clone repo ").unwrap();
//! assert_eq!(
//!     arena.as_str().unwrap(),
//!     "git clone repo /home/u/.local/share/nvim/site/"
//! );
//!
//! arena.destroy();
//! assert!(arena.is_destroyed());
//! ```
//!
//! Running the full sequence needs a [`Host`](types::Host) implementation
//! for the editor being configured:
//!
//! ```rust,ignore
//! let report = Bootstrap::new(BootConfig::default())?.run(&mut host)?;
//! println!("declared {} plugins", report.plugins_declared);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `strand-arena` | `Arena`, `ArenaConfig`, `ArenaError` |
//! | [`types`] | `strand-core` | Option values, bindings, plugins, the `Host` trait |
//! | [`boot`] | `strand-boot` | `BootConfig`, `Bootstrap`, stock defaults |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fixed-capacity byte arena (`strand-arena`).
///
/// [`arena::Arena`] is also available in the [`prelude`].
pub use strand_arena as arena;

/// Core types and the host adapter trait (`strand-core`).
///
/// Contains option values, keybindings, autocommands, plugin
/// declarations, and [`types::Host`].
pub use strand_core as types;

/// The bootstrap sequence and its configuration (`strand-boot`).
///
/// [`boot::Bootstrap`] applies a [`boot::BootConfig`] to a host;
/// [`boot::defaults`] holds the stock editor setup.
pub use strand_boot as boot;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use strand_arena::{Arena, ArenaConfig, ArenaError};

    // Core types and the host trait
    pub use strand_core::{
        AutoCommand, Host, HostError, KeyBinding, Mode, OptionValue, PluginSpec,
    };

    // Bootstrap
    pub use strand_boot::{
        BootConfig, BootError, BootReport, Bootstrap, ConfigError, PluginManagerConfig,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use strand_test_utils::RecordingHost;

    #[test]
    fn prelude_runs_stock_bootstrap() {
        let mut host = RecordingHost::default();
        let report = Bootstrap::new(BootConfig::default())
            .unwrap()
            .run(&mut host)
            .unwrap();
        assert!(report.manager_installed);
        assert_eq!(host.shell_calls.len(), 1);
        assert!(report.plugins_declared > 0);
    }
}
