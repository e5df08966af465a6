//! Reusable configuration fixtures.
//!
//! - [`sample_plugins`]: three plugins covering checkout and dependencies.
//! - [`sample_bindings`]: one binding per common mode.
//! - [`yank_highlight`]: the stock `TextYankPost` autocommand.

use strand_core::{AutoCommand, KeyBinding, Mode, PluginSpec};

/// Install command used by tests that want short, predictable strings.
pub const SHORT_INSTALL_COMMAND: &str = "git clone mgr ";

pub fn sample_plugins() -> Vec<PluginSpec> {
    vec![
        PluginSpec::new("tpope/vim-sleuth"),
        PluginSpec::new("ThePrimeagen/harpoon")
            .checkout("harpoon2")
            .depends_on("nvim-lua/plenary.nvim")
            .with_setup("lua require('harpoon'):setup()"),
        PluginSpec::new("folke/which-key.nvim")
            .with_setup("lua require('which-key').setup({ delay = 300 })"),
    ]
}

pub fn sample_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new(Mode::Normal, "j", "gj"),
        KeyBinding::new(Mode::Visual, "<leader>y", "\"+y"),
        KeyBinding::new(Mode::Insert, "jk", "<esc>"),
        KeyBinding::new(Mode::Terminal, "<C-w>", "<c-\\><c-n>"),
    ]
}

pub fn yank_highlight() -> AutoCommand {
    AutoCommand {
        event: "TextYankPost".to_string(),
        description: "Highlight when yanking (copying) text".to_string(),
        group: "my-highlight-yank".to_string(),
        clear_group: true,
        command: "lua vim.highlight.on_yank({ on_visual = false })".to_string(),
    }
}
