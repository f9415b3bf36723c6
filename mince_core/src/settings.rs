// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration accepted by [`crate::minify`].

use oxc_span::Atom;

/// Whether the serializer emits line breaks and indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Pack everything onto as few lines as possible. Default.
    #[default]
    SingleLine,
    /// Emit newlines and indent nested blocks.
    MultiLine,
}

/// Controls candidate selection for the name minifier (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalRenaming {
    /// Don't rename any user-written identifier.
    None,
    /// Rename every renamable binding, even ones whose current name is
    /// already a short valid identifier. Default.
    #[default]
    Hypercrunch,
    /// Like `Hypercrunch`, but leave localization-style variable names
    /// (matched by `Settings::no_auto_rename` and a `Loc`-prefixed
    /// heuristic) untouched so translators can still find them by name in
    /// the minified output.
    KeepLocalizationVars,
}

/// Overrides directive-prologue based strict-mode detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrictMode {
    /// Trust each scope's own `"use strict"` directive prologue. Default.
    #[default]
    Auto,
    /// Treat every scope as strict, regardless of directive prologues.
    On,
    /// Treat every scope as sloppy, regardless of directive prologues.
    Off,
}

/// Constrains the accepted AST shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Full ECMAScript grammar. Default.
    #[default]
    JavaScript,
    /// Only object/array/constant literal expressions are accepted;
    /// everything else is a fatal diagnostic.
    Json,
}

/// A single source-identifier to fixed-alternate-name mapping, pre-populating
/// the renamer (§6, `rename_pairs`).
#[derive(Debug, Clone)]
pub struct RenamePair {
    pub from: Atom<'static>,
    pub to: Atom<'static>,
}

/// All tunables accepted by [`crate::minify`] (§6).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Controls whether the serializer emits line breaks and indentation.
    pub output_mode: OutputMode,
    /// Multi-line indent width, in spaces.
    pub indent_spaces: u32,
    /// Emit one space on either side of binary/ternary operators.
    pub operator_spaces: bool,
    /// Force a trailing `;` at program end and between concatenated files.
    pub term_semicolons: bool,
    /// Escape `</script>` and `]]>` in string literals.
    pub inline_safe_strings: bool,
    /// Controls §4.4 candidate selection.
    pub local_renaming: LocalRenaming,
    /// Sets `can_rename = false` on function-name bindings and NFE bindings.
    pub preserve_function_names: bool,
    /// Pre-populates alternate names for specific source identifiers.
    pub rename_pairs: Vec<RenamePair>,
    /// Identifiers whose bindings get `can_rename = false`.
    pub no_auto_rename: Vec<Atom<'static>>,
    /// Enables the if-true-branch brace-wrapping hazard fix for old Safari.
    pub mac_safari_quirks: bool,
    /// Skip emission of `@cc_on`, `@if`, `@set`, `@*/` sequences.
    pub ignore_conditional_compilation: bool,
    /// Overrides directive-prologue based strict-mode detection.
    pub strict_mode: StrictMode,
    /// Suppresses diagnostics above this severity (0 = fatal only, 4 = all).
    pub warning_level: u8,
    /// Constrains the accepted AST shape.
    pub format: Format,
    /// Rewrite `true`/`false` constants to `!0`/`!1` in the final pass.
    pub rewrite_booleans: bool,
    /// Forces renaming even inside scopes that are not known at compile
    /// time (a `with` body, or a scope containing a direct `eval`). See the
    /// Open Question in `DESIGN.md`.
    pub must_rename_bindings: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::default(),
            indent_spaces: 4,
            operator_spaces: false,
            term_semicolons: false,
            inline_safe_strings: true,
            local_renaming: LocalRenaming::default(),
            preserve_function_names: false,
            rename_pairs: Vec::new(),
            no_auto_rename: Vec::new(),
            mac_safari_quirks: false,
            ignore_conditional_compilation: false,
            strict_mode: StrictMode::default(),
            warning_level: 4,
            format: Format::default(),
            rewrite_booleans: false,
            must_rename_bindings: false,
        }
    }
}
