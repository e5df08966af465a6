//! Fixed-capacity byte arena for staging strings handed to an editor host.
//!
//! The arena owns one zero-initialised region allocated up front and a
//! logical length cursor. Fragments are appended at the cursor, cut off
//! the end, or rewritten in place with a range splice that relocates the
//! untouched tail. Nothing ever reallocates, so a bootstrap sequence can
//! assemble search paths, shell command lines and interpreter snippets
//! without one heap allocation per fragment.
//!
//! # Operations
//!
//! | Operation | Method |
//! |-----------|--------|
//! | create / destroy | [`Arena::new`], [`Arena::destroy`] |
//! | free space | [`Arena::free_space`] |
//! | bump | [`Arena::alloc`] |
//! | cut | [`Arena::shrink`], [`Arena::clear`], [`Arena::truncate`] |
//! | append | [`Arena::append_bytes`], [`Arena::append_str`], [`Arena::append_fmt`] |
//! | rewrite | [`Arena::splice`], [`Arena::replace_range`] |
//! | read | [`Arena::view`], [`Arena::as_str`], [`Arena::slice`] |
//!
//! Every fallible operation is all-or-nothing: on error the arena is
//! exactly as it was before the call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
mod splice;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
