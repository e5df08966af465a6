//! The stock editor setup used by `BootConfig::default()`.
//!
//! Options, keymaps, plugins and autocommands of the reference
//! configuration, expressed as plain data.

use strand_core::{AutoCommand, KeyBinding, Mode, OptionValue, PluginSpec};

use crate::config::BootConfig;

impl Default for BootConfig {
    fn default() -> Self {
        let mut cfg = Self::minimal();
        cfg.set_global("mapleader", " ");
        cfg.set_global("maplocalleader", ",");
        for (name, value) in default_options() {
            cfg.set_option(name, value);
        }
        cfg.commands = default_commands();
        cfg.snippets = default_snippets();
        cfg.plugins = default_plugins();
        cfg.post_commands = vec![
            "highlight ColorColumn guibg=#C7CBDB".to_string(),
            "highlight Whitespace guifg=#D0D1D8".to_string(),
        ];
        cfg.keybindings = default_keybindings();
        cfg.autocommands = vec![AutoCommand {
            event: "TextYankPost".to_string(),
            description: "Highlight when yanking (copying) text".to_string(),
            group: "my-highlight-yank".to_string(),
            clear_group: true,
            command: "lua vim.highlight.on_yank({ on_visual = false })".to_string(),
        }];
        cfg
    }
}

/// Editor options, in application order.
pub fn default_options() -> Vec<(&'static str, OptionValue)> {
    use OptionValue::{Bool, Int};
    vec![
        ("number", Bool(true)),
        ("relativenumber", Bool(true)),
        ("mouse", "a".into()),
        ("undofile", Bool(true)),
        ("ignorecase", Bool(true)),
        ("smartcase", Bool(true)),
        ("signcolumn", "yes".into()),
        ("updatetime", Int(50)),
        ("splitright", Bool(true)),
        ("splitbelow", Bool(true)),
        ("list", Bool(true)),
        ("listchars", "tab:» ,trail:·,nbsp:␣".into()),
        ("inccommand", "split".into()),
        ("scrolloff", Int(1)),
        ("sidescrolloff", Int(20)),
        ("tabstop", Int(4)),
        ("softtabstop", Int(4)),
        ("shiftwidth", Int(4)),
        ("colorcolumn", "80".into()),
        ("showbreak", "└▶".into()),
        ("wrap", Bool(false)),
        ("breakindent", Bool(true)),
        ("guicursor", "n-v-c:block".into()),
        ("wildmode", "longest:full".into()),
        ("wildmenu", Bool(true)),
        ("completeopt", "longest".into()),
        ("background", "light".into()),
    ]
}

fn default_commands() -> Vec<String> {
    vec![
        "set cinoptions+=:0,l1".to_string(),
        "packadd mini.nvim | helptags ALL".to_string(),
    ]
}

fn default_snippets() -> Vec<String> {
    vec![
        "lua require('mini.ai').setup({ n_lines = 500 })".to_string(),
        "lua require('mini.bracketed').setup()".to_string(),
        concat!(
            "lua require('mini.comment').setup({ options = {",
            " custom_commentstring = function()",
            " if vim.bo.ft == 'verilog' then return '/* %s */' end",
            " return nil end,",
            " ignore_blank_line = true } })"
        )
        .to_string(),
    ]
}

/// Plugins with their setup snippets, in declaration order.
pub fn default_plugins() -> Vec<PluginSpec> {
    const PLENARY: &str = "nvim-lua/plenary.nvim";
    vec![
        PluginSpec::new("tpope/vim-sleuth"),
        PluginSpec::new("lewis6991/gitsigns.nvim").with_setup(concat!(
            "lua require('gitsigns').setup({ signs = {",
            " add = { text = '+' }, change = { text = '~' },",
            " delete = { text = '_' }, topdelete = { text = '‾' },",
            " changedelete = { text = '~' } } })"
        )),
        PluginSpec::new("stevearc/oil.nvim").with_setup(concat!(
            "lua require('oil').setup({ columns = { 'mtime', 'icon' },",
            " natural_order = true, delete_to_trash = true,",
            " view_options = { icon = true },",
            " keymaps = { ['g?'] = 'actions.show_help', ['<CR>'] = 'actions.select',",
            " ['L'] = 'actions.select', ['H'] = 'actions.parent',",
            " ['<C-c>'] = 'actions.close', ['<C-l>'] = 'actions.refresh',",
            " ['g.'] = 'actions.toggle_hidden', ['g\\\\'] = 'actions.toggle_trash' } })"
        )),
        PluginSpec::new("jiaoshijie/undotree")
            .depends_on(PLENARY)
            .with_setup("lua require('undotree').setup()"),
        PluginSpec::new("folke/which-key.nvim")
            .with_setup("lua require('which-key').setup({ delay = 300 })"),
        PluginSpec::new("nvim-telescope/telescope.nvim")
            .depends_on(PLENARY)
            .depends_on("nvim-telescope/telescope-fzf-native.nvim")
            .with_setup("lua require('telescope').setup()"),
        PluginSpec::new("chentoast/marks.nvim")
            .with_setup("lua require('marks').setup({ default_mappings = true, mappings = {} })"),
        PluginSpec::new("ThePrimeagen/harpoon")
            .checkout("harpoon2")
            .depends_on(PLENARY)
            .with_setup("lua require('harpoon'):setup()"),
        PluginSpec::new("stevearc/conform.nvim").with_setup(concat!(
            "lua require('conform').setup({ formatters_by_ft = {",
            " c = { 'clang-format' }, cpp = { 'clang-format' },",
            " lua = { 'stylua' }, rust = { 'rustfmt' },",
            " python = { 'ruff_format' }, odin = { 'odinfmt' } },",
            " formatters = { odinfmt = { command = 'odinfmt', args = { '-stdin' }, stdin = true } } })"
        )),
        PluginSpec::new("nvim-treesitter/nvim-treesitter").with_setup(concat!(
            "lua require('nvim-treesitter').setup({ auto_install = true,",
            " highlight = { enable = false }, indent = { enable = false } })"
        )),
        PluginSpec::new("folke/todo-comments.nvim")
            .depends_on(PLENARY)
            .with_setup("lua require('todo-comments').setup({ signs = false })"),
        PluginSpec::new("catgoose/nvim-colorizer.lua").with_setup(
            "lua require('colorizer').setup({ user_default_options = { names = false } })",
        ),
        PluginSpec::new("max397574/colortils.nvim")
            .with_setup("lua require('colortils').setup()"),
        PluginSpec::new("zenbones-theme/zenbones.nvim").depends_on("rktjmp/lush.nvim"),
    ]
}

/// Keybindings, in registration order.
pub fn default_keybindings() -> Vec<KeyBinding> {
    use Mode::{Normal, Terminal, Visual};
    let table: &[(Mode, &str, &str)] = &[
        // plugins
        (Normal, "]h", "<cmd>lua require('gitsigns').nav_hunk('next')<cr>"),
        (Normal, "[h", "<cmd>lua require('gitsigns').nav_hunk('prev')<cr>"),
        (Normal, "<leader>uf", "<cmd>Oil<cr>"),
        (Normal, "<leader>cu", "<cmd>lua require('undotree').toggle()<cr>"),
        (Normal, "<leader>sn", "<cmd>lua require('telescope.builtin').find_files({cwd=vim.fn.stdpath('config')})<cr>"),
        (Normal, "<leader>sf", "<cmd>lua require('telescope.builtin').find_files()<cr>"),
        (Normal, "<leader>sg", "<cmd>lua require('telescope.builtin').live_grep()<cr>"),
        (Normal, "<leader>sd", "<cmd>lua require('telescope.builtin').diagnostics()<cr>"),
        (Normal, "<leader>s.", "<cmd>lua require('telescope.builtin').oldfiles()<cr>"),
        (Normal, "<leader>so", "<cmd>lua require('telescope.builtin').buffers()<cr>"),
        (Normal, "<leader>sm", "<cmd>lua require('telescope.builtin').man_pages({sections={'ALL'}})<cr>"),
        (Normal, "<M-m>", "<cmd>lua require('harpoon'):list():add()<cr>"),
        (Normal, "<leader>hm", "<cmd>lua require('harpoon'):list():add()<cr>"),
        (Normal, "<M-l>", "<cmd>lua require('harpoon').ui:toggle_quick_menu(require('harpoon'):list())<cr>"),
        (Normal, "<leader>hl", "<cmd>lua require('harpoon').ui:toggle_quick_menu(require('harpoon'):list())<cr>"),
        (Normal, "<M-f>", "<cmd>lua require('harpoon'):list():select(1)<cr>"),
        (Normal, "<leader>hf", "<cmd>lua require('harpoon'):list():select(1)<cr>"),
        (Normal, "<M-d>", "<cmd>lua require('harpoon'):list():select(2)<cr>"),
        (Normal, "<leader>hd", "<cmd>lua require('harpoon'):list():select(2)<cr>"),
        (Normal, "<M-s>", "<cmd>lua require('harpoon'):list():select(3)<cr>"),
        (Normal, "<leader>hs", "<cmd>lua require('harpoon'):list():select(3)<cr>"),
        (Normal, "<M-a>", "<cmd>lua require('harpoon'):list():select(4)<cr>"),
        (Normal, "<leader>ha", "<cmd>lua require('harpoon'):list():select(4)<cr>"),
        (Normal, "<leader>cf", "<cmd>lua require('conform').format({ async = true, lsp_format = 'fallback' })<cr>"),
        (Normal, "<leader>st", "<cmd>TodoTelescope<cr>"),
        (Normal, "<leader>uh", "<cmd>Colortils<cr>"),
        // terminal
        (Terminal, "<C-w>", "<c-\\><c-n>"),
        // navigation
        (Normal, "<C-d>", "<C-d>zz"),
        (Normal, "<C-u>", "<C-u>zz"),
        (Normal, "j", "gj"),
        (Normal, "k", "gk"),
        // system clipboard
        (Normal, "<leader>y", "\"+y"),
        (Visual, "<leader>y", "\"+y"),
        (Normal, "<leader>Y", "\"+Y"),
        (Normal, "<esc>", "<cmd>nohlsearch<cr><esc>"),
        // lists and utilities
        (Normal, "<leader>uq", "<cmd>copen<cr>"),
        (Normal, "<leader>ul", "<cmd>lopen<cr>"),
        (Normal, "<leader>cw", "<cmd>cd %:p:h<cr>"),
        (Normal, "<leader>cm", "<cmd>Man<cr>"),
        (Normal, "<leader>cW", "<cmd>s/\\s\\+$//g<cr>"),
        (Normal, "<leader>mm", "<cmd>make<cr>"),
        (Normal, "<leader>um", "<cmd>messages<cr>"),
        (Normal, "<leader>th", "<cmd>ColorizerToggle<cr>"),
        // windows
        (Normal, "<leader>v", "<cmd>vsp<cr>"),
        (Normal, "<leader>pv", "<cmd>vsp<cr>"),
        (Normal, "<leader>x", "<cmd>sp<cr>"),
        (Normal, "<leader>px", "<cmd>sp<cr>"),
        (Normal, "<leader>pt", "<cmd>tab split<cr>"),
        (Normal, "<leader>p|", "<cmd>vertical resize<cr>"),
        (Normal, "<leader>p_", "<cmd>horizontal resize<cr>"),
        (Normal, "<leader>pZ", "<cmd>wincmd =<cr>"),
        (Normal, "<leader>pz", "<cmd>horizontal resize<cr><cmd>vertical resize<cr>"),
        (Normal, "<leader>pN", "<cmd>setlocal buftype=nofile<cr>"),
    ];
    table
        .iter()
        .map(|&(mode, lhs, rhs)| KeyBinding::new(mode, lhs, rhs))
        .collect()
}
