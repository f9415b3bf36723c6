// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering diagnostics to the terminal.

use mince_core::{DiagnosticSink, Severity};
use oxc_diagnostics::OxcDiagnostic;

/// Exit the program with parse errors, exactly as this stack's own engine
/// front end reports `oxc_parser` syntax errors.
pub fn exit_with_parse_errors(errors: Vec<OxcDiagnostic>, source_path: &str, source: &str) -> ! {
    assert!(!errors.is_empty());

    miette::set_hook(Box::new(|_| {
        Box::new(oxc_diagnostics::GraphicalReportHandler::new())
    }))
    .ok();

    let source: &'static str = Box::leak(source.to_string().into_boxed_str());
    let named_source = miette::NamedSource::new(source_path, source);

    eprintln!("SyntaxError:");
    for error in errors {
        let report = error.with_source_code(named_source.clone());
        eprintln!("{report:?}");
    }

    std::process::exit(1);
}

/// A [`DiagnosticSink`] that renders every diagnostic to stderr as it
/// arrives, tallying errors so the caller can decide the exit code once
/// `minify` returns (§7: a non-fatal diagnostic prints and processing
/// continues).
pub struct ReportingSink<'a> {
    source_path: &'a str,
    source: &'a str,
    error_count: u32,
}

impl<'a> ReportingSink<'a> {
    pub fn new(source_path: &'a str, source: &'a str) -> Self {
        Self {
            source_path,
            source,
            error_count: 0,
        }
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }
}

impl DiagnosticSink for ReportingSink<'_> {
    fn report(&mut self, severity: Severity, _code: mince_core::DiagnosticCode, diagnostic: OxcDiagnostic) {
        if matches!(severity, Severity::Error | Severity::Fatal) {
            self.error_count += 1;
        }
        let named_source = miette::NamedSource::new(self.source_path, self.source.to_string());
        let report = diagnostic.with_source_code(named_source);
        eprintln!("{report:?}");
    }
}
