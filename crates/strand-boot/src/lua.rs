//! Interpreter snippet composition.
//!
//! Snippets are written straight into the staging arena and handed to
//! the host as ex command lines (`lua ...`). Each composer is
//! all-or-nothing: on overflow the arena is rolled back to where the
//! snippet started.

use std::fmt;

use strand_arena::{Arena, ArenaError};
use strand_core::PluginSpec;

/// Displays a string as a single-quoted Lua literal.
///
/// Backslashes, single quotes and line breaks are escaped, so the output
/// is always one well-formed literal on one line.
#[derive(Clone, Copy, Debug)]
pub struct LuaStr<'a>(pub &'a str);

impl fmt::Display for LuaStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        let mut rest = self.0;
        while let Some(pos) = rest.find(['\\', '\'', '\n', '\r']) {
            f.write_str(&rest[..pos])?;
            let escaped = match rest.as_bytes()[pos] {
                b'\\' => "\\\\",
                b'\'' => "\\'",
                b'\n' => "\\n",
                _ => "\\r",
            };
            f.write_str(escaped)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)?;
        f.write_str("'")
    }
}

/// Compose `lua require('<module>').setup({ path = { package = '<path>' } })`.
pub fn compose_manager_setup(
    arena: &mut Arena,
    module: &str,
    package_path: &str,
) -> Result<(), ArenaError> {
    arena.append_fmt(format_args!(
        "lua require({}).setup({{ path = {{ package = {} }} }})",
        LuaStr(module),
        LuaStr(package_path),
    ))
}

/// Compose `lua <add_function>({ source = ..., checkout = ..., depends = { ... } })`.
///
/// `checkout` and `depends` are omitted when unset.
pub fn compose_plugin_add(
    arena: &mut Arena,
    add_function: &str,
    plugin: &PluginSpec,
) -> Result<(), ArenaError> {
    let mark = arena.mark();
    let result = write_plugin_add(arena, add_function, plugin);
    if result.is_err() {
        arena.truncate(mark);
    }
    result
}

fn write_plugin_add(
    arena: &mut Arena,
    add_function: &str,
    plugin: &PluginSpec,
) -> Result<(), ArenaError> {
    arena.append_fmt(format_args!(
        "lua {add_function}({{ source = {}",
        LuaStr(&plugin.source)
    ))?;
    if let Some(rev) = &plugin.checkout {
        arena.append_fmt(format_args!(", checkout = {}", LuaStr(rev)))?;
    }
    if !plugin.depends.is_empty() {
        arena.append_str(", depends = { ")?;
        for (i, dep) in plugin.depends.iter().enumerate() {
            if i > 0 {
                arena.append_str(", ")?;
            }
            arena.append_fmt(format_args!("{}", LuaStr(dep)))?;
        }
        arena.append_str(" }")?;
    }
    arena.append_str(" })")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lua_str_escapes_quotes_and_backslashes() {
        assert_eq!(LuaStr("plain").to_string(), "'plain'");
        assert_eq!(LuaStr("it's").to_string(), r"'it\'s'");
        assert_eq!(LuaStr(r"C:\nvim").to_string(), r"'C:\\nvim'");
        assert_eq!(LuaStr("a\nb").to_string(), r"'a\nb'");
        assert_eq!(LuaStr("").to_string(), "''");
    }

    #[test]
    fn manager_setup_snippet() {
        let mut arena = Arena::new(256).unwrap();
        compose_manager_setup(&mut arena, "mini.deps", "/home/u/.local/share/nvim/site/")
            .unwrap();
        assert_eq!(
            arena.as_str().unwrap(),
            "lua require('mini.deps').setup({ path = { package = '/home/u/.local/share/nvim/site/' } })"
        );
    }

    #[test]
    fn plugin_add_minimal() {
        let mut arena = Arena::new(256).unwrap();
        compose_plugin_add(&mut arena, "MiniDeps.add", &PluginSpec::new("tpope/vim-sleuth"))
            .unwrap();
        assert_eq!(
            arena.as_str().unwrap(),
            "lua MiniDeps.add({ source = 'tpope/vim-sleuth' })"
        );
    }

    #[test]
    fn plugin_add_with_checkout_and_depends() {
        let mut arena = Arena::new(256).unwrap();
        let spec = PluginSpec::new("ThePrimeagen/harpoon")
            .checkout("harpoon2")
            .depends_on("nvim-lua/plenary.nvim")
            .depends_on("x/y");
        compose_plugin_add(&mut arena, "MiniDeps.add", &spec).unwrap();
        assert_eq!(
            arena.as_str().unwrap(),
            "lua MiniDeps.add({ source = 'ThePrimeagen/harpoon', checkout = 'harpoon2', \
             depends = { 'nvim-lua/plenary.nvim', 'x/y' } })"
        );
    }

    #[test]
    fn plugin_add_rolls_back_on_overflow() {
        let mut arena = Arena::new(48).unwrap();
        arena.append_str("keep").unwrap();
        let spec = PluginSpec::new("a/b").depends_on("some/very-long-dependency-name");
        let err = compose_plugin_add(&mut arena, "MiniDeps.add", &spec).unwrap_err();
        assert!(matches!(err, ArenaError::CapacityExceeded { .. }));
        assert_eq!(arena.view(), b"keep");
    }

    // ── proptest ───────────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn unescape(literal: &str) -> String {
            let inner = &literal[1..literal.len() - 1];
            let mut out = String::new();
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                if c != '\\' {
                    out.push(c);
                    continue;
                }
                match chars.next() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some(other) => out.push(other),
                    None => panic!("dangling escape in {literal}"),
                }
            }
            out
        }

        proptest! {
            #[test]
            fn lua_str_is_one_line_and_reversible(s in ".{0,40}") {
                let literal = LuaStr(&s).to_string();
                prop_assert!(literal.starts_with('\'') && literal.ends_with('\''));
                prop_assert!(!literal.contains('\n') && !literal.contains('\r'));
                prop_assert_eq!(unescape(&literal), s);
            }

            #[test]
            fn plugin_add_is_all_or_nothing(
                capacity in 8usize..160,
                deps in prop::collection::vec("[a-z]{1,12}/[a-z]{1,12}", 0..4),
            ) {
                let mut arena = Arena::new(capacity).unwrap();
                arena.append_str("pre").unwrap();
                let mut spec = PluginSpec::new("owner/repo");
                for dep in &deps {
                    spec = spec.depends_on(dep.as_str());
                }
                match compose_plugin_add(&mut arena, "MiniDeps.add", &spec) {
                    Ok(()) => {
                        let text = arena.as_str().unwrap();
                        prop_assert!(
                            text.starts_with("prelua MiniDeps.add({ source = 'owner/repo'"),
                            "unexpected prefix: {}",
                            text
                        );
                        prop_assert!(text.ends_with(" })"), "unterminated: {}", text);
                    }
                    Err(_) => prop_assert_eq!(arena.view(), b"pre"),
                }
            }
        }
    }
}
