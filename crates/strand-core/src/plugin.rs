//! Plugin declarations handed to the plugin manager.

use smallvec::SmallVec;

/// A third-party plugin to be declared with the plugin manager.
///
/// `source` is a `user/repo` shorthand or a full URL. Most plugins have
/// zero to two dependencies, so `depends` stays inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginSpec {
    /// Repository shorthand, e.g. `"stevearc/oil.nvim"`.
    pub source: String,
    /// Branch, tag or commit to check out instead of the default branch.
    pub checkout: Option<String>,
    /// Sources of plugins this one depends on.
    pub depends: SmallVec<[String; 2]>,
    /// Interpreter snippets run verbatim after the plugin is declared
    /// (typically `lua require('x').setup { ... }`).
    pub setup: Vec<String>,
}

impl PluginSpec {
    /// Declare a plugin with no checkout, dependencies, or setup.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            checkout: None,
            depends: SmallVec::new(),
            setup: Vec::new(),
        }
    }

    /// Pin the plugin to a branch, tag or commit.
    pub fn checkout(mut self, rev: impl Into<String>) -> Self {
        self.checkout = Some(rev.into());
        self
    }

    /// Add a dependency.
    pub fn depends_on(mut self, source: impl Into<String>) -> Self {
        self.depends.push(source.into());
        self
    }

    /// Add a setup snippet.
    pub fn with_setup(mut self, snippet: impl Into<String>) -> Self {
        self.setup.push(snippet.into());
        self
    }

    /// Check that the source and every dependency are non-empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.source.trim().is_empty() {
            return Err("plugin source is empty".to_string());
        }
        if self.depends.iter().any(|d| d.trim().is_empty()) {
            return Err(format!("plugin '{}' has an empty dependency", self.source));
        }
        if matches!(&self.checkout, Some(rev) if rev.trim().is_empty()) {
            return Err(format!("plugin '{}' has an empty checkout", self.source));
        }
        Ok(())
    }
}
