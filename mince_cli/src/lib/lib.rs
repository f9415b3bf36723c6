// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for the mince CLI program.
//!
//! > [!IMPORTANT]
//! > This library is currently mainly aimed at internal use and might not
//! > adhere to semver versioning.

mod fmt;

pub use fmt::{ReportingSink, exit_with_parse_errors};

use mince_core::{Format, LocalRenaming, OutputMode, Settings, StrictMode};

/// Flags accepted by the `minify` subcommand, assembled into a
/// [`Settings`] by [`settings_from_flags`]. A plain struct, matching how
/// this stack's own `InstanceConfig` is a plain struct assembled from CLI
/// flags rather than a builder or a config-file loader.
#[derive(Debug, Clone)]
pub struct CliFlags {
    pub multi_line: bool,
    pub indent: u32,
    pub operator_spaces: bool,
    pub term_semicolons: bool,
    pub no_inline_safe_strings: bool,
    pub local_renaming: LocalRenamingArg,
    pub preserve_function_names: bool,
    pub mac_safari_quirks: bool,
    pub ignore_conditional_compilation: bool,
    pub strict: StrictArg,
    pub warning_level: u8,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LocalRenamingArg {
    None,
    #[default]
    Hypercrunch,
    KeepLocalization,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum StrictArg {
    #[default]
    Auto,
    On,
    Off,
}

pub fn settings_from_flags(flags: &CliFlags) -> Settings {
    let mut settings = Settings {
        output_mode: if flags.multi_line { OutputMode::MultiLine } else { OutputMode::SingleLine },
        indent_spaces: flags.indent,
        operator_spaces: flags.operator_spaces,
        term_semicolons: flags.term_semicolons,
        inline_safe_strings: !flags.no_inline_safe_strings,
        local_renaming: match flags.local_renaming {
            LocalRenamingArg::None => LocalRenaming::None,
            LocalRenamingArg::Hypercrunch => LocalRenaming::Hypercrunch,
            LocalRenamingArg::KeepLocalization => LocalRenaming::KeepLocalizationVars,
        },
        preserve_function_names: flags.preserve_function_names,
        mac_safari_quirks: flags.mac_safari_quirks,
        ignore_conditional_compilation: flags.ignore_conditional_compilation,
        strict_mode: match flags.strict {
            StrictArg::Auto => StrictMode::Auto,
            StrictArg::On => StrictMode::On,
            StrictArg::Off => StrictMode::Off,
        },
        warning_level: flags.warning_level,
        format: if flags.json { Format::Json } else { Format::JavaScript },
        ..Settings::default()
    };
    if settings.indent_spaces == 0 {
        settings.indent_spaces = 4;
    }
    settings
}
