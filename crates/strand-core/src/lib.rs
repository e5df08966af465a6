//! Core types and traits for the Strand bootstrap.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the boundary between the bootstrap sequence and the editor host:
//! option values, keybindings, autocommands, plugin declarations, the
//! [`Host`] adapter trait, and the [`HostError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binding;
pub mod error;
pub mod plugin;
pub mod traits;
pub mod value;

pub use binding::{AutoCommand, KeyBinding, Mode};
pub use error::HostError;
pub use plugin::PluginSpec;
pub use traits::Host;
pub use value::OptionValue;
