// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand};
use mince_cli::{self as lib, CliFlags, LocalRenamingArg, StrictArg, settings_from_flags};
use mince_core::minify;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// A JavaScript minifier
#[derive(Debug, ClapParser)]
#[command(name = "mince")]
#[command(about = "A JavaScript minifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Minifies one or more source files
    Minify {
        /// The files to minify, concatenated in order.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Writes minified output to this path instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Writes a source map to this path.
        #[arg(long)]
        map: Option<PathBuf>,

        /// Emit newlines and indentation instead of packing onto one line.
        #[arg(long)]
        multi_line: bool,

        /// Multi-line indent width, in spaces.
        #[arg(long, default_value_t = 4)]
        indent: u32,

        /// Emit a space on either side of binary/ternary operators.
        #[arg(long)]
        operator_spaces: bool,

        /// Force a trailing `;` at program end and between concatenated files.
        #[arg(long)]
        term_semicolons: bool,

        /// Don't escape `</script>`/`]]>` in string literals.
        #[arg(long)]
        no_inline_safe_strings: bool,

        /// Candidate selection strategy for the name minifier.
        #[arg(long, value_enum, default_value_t = LocalRenamingArg::Hypercrunch)]
        local_renaming: LocalRenamingArg,

        /// Never rename function-name bindings.
        #[arg(long)]
        preserve_function_names: bool,

        /// Enable the if-true-branch brace-wrapping fix for old Safari.
        #[arg(long)]
        mac_safari_quirks: bool,

        /// Skip emission of `@cc_on`/`@if`/`@set`/`@*/` sequences.
        #[arg(long)]
        ignore_conditional_compilation: bool,

        /// Overrides directive-prologue based strict-mode detection.
        #[arg(long, value_enum, default_value_t = StrictArg::Auto)]
        strict: StrictArg,

        /// Suppresses diagnostics above this severity (0 = fatal only, 4 = all).
        #[arg(long, default_value_t = 4)]
        warning_level: u8,

        /// Restrict the accepted input to a single JSON expression.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    match args.command {
        Command::Minify {
            files,
            output,
            map,
            multi_line,
            indent,
            operator_spaces,
            term_semicolons,
            no_inline_safe_strings,
            local_renaming,
            preserve_function_names,
            mac_safari_quirks,
            ignore_conditional_compilation,
            strict,
            warning_level,
            json,
        } => {
            let flags = CliFlags {
                multi_line,
                indent,
                operator_spaces,
                term_semicolons,
                no_inline_safe_strings,
                local_renaming,
                preserve_function_names,
                mac_safari_quirks,
                ignore_conditional_compilation,
                strict,
                warning_level,
                json,
            };
            let settings = settings_from_flags(&flags);
            let known_globals: HashSet<oxc_span::Atom> = HashSet::new();

            let mut minified = String::new();
            let mut had_errors = false;

            let mut map_sink: Option<mince_core::V3SourceMapSink> = map.is_some().then(mince_core::V3SourceMapSink::new);
            if let Some(sink) = map_sink.as_mut() {
                sink.start_package(None);
            }

            for path in &files {
                let source = fs::read_to_string(path)?;
                let path_str = path.display().to_string();
                let allocator = Allocator::default();
                let source_type = SourceType::default();
                let parser_result = Parser::new(&allocator, &source, source_type).parse();

                if !parser_result.errors.is_empty() {
                    lib::exit_with_parse_errors(parser_result.errors, &path_str, &source);
                }

                let mut sink = lib::ReportingSink::new(&path_str, &source);
                let map_arg: Option<&mut dyn mince_core::SourceMapSink> =
                    map_sink.as_mut().map(|s| s as &mut dyn mince_core::SourceMapSink);
                let result = minify(
                    &parser_result.program,
                    &source,
                    &path_str,
                    &settings,
                    &known_globals,
                    &mut sink,
                    &mut minified,
                    map_arg,
                );
                if sink.error_count() > 0 {
                    had_errors = true;
                }
                if result.is_err() {
                    eprintln!("fatal: {path_str}: input AST violates the accepted shape");
                    std::process::exit(1);
                }
            }

            match output {
                Some(path) => fs::write(&path, &minified)?,
                None => print!("{minified}"),
            }

            if let (Some(map_path), Some(mut sink)) = (map, map_sink) {
                let json = sink.end_package();
                fs::write(&map_path, json)?;
            }

            if had_errors {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
