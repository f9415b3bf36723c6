// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structured diagnostics (§6, §7).
//!
//! Diagnostics are plain [`OxcDiagnostic`] values, the same currency this
//! ecosystem already uses to report parse errors (see `oxc_parser`'s
//! `result.errors`); a host that already knows how to render those (for
//! instance with `oxc-miette`'s `GraphicalReportHandler`, as `mince_cli`
//! does) gets minifier diagnostics rendered for free.

use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;

/// Severity of a diagnostic (§7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// AST shape violated; the core aborts and no output is produced.
    Fatal,
    /// Semantics-violating source; emitted, processing continues.
    Error,
    /// Potentially-wrong source or cross-browser hazard; emitted, processing
    /// continues.
    Warning,
}

/// Canonical diagnostic codes (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    DuplicateName,
    SuperfluousVarDeclaration,
    UndeclaredVariable,
    UndeclaredFunction,
    ArgumentNotReferenced,
    VariableDefinedNotReferenced,
    FunctionNotReferenced,
    HiddenArgument,
    AmbiguousNamedFunctionExpression,
    StrictModeDuplicateArgument,
    StrictModeReservedWord,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::DuplicateName => "DuplicateName",
            DiagnosticCode::SuperfluousVarDeclaration => "SuperfluousVarDeclaration",
            DiagnosticCode::UndeclaredVariable => "UndeclaredVariable",
            DiagnosticCode::UndeclaredFunction => "UndeclaredFunction",
            DiagnosticCode::ArgumentNotReferenced => "ArgumentNotReferenced",
            DiagnosticCode::VariableDefinedNotReferenced => "VariableDefinedNotReferenced",
            DiagnosticCode::FunctionNotReferenced => "FunctionNotReferenced",
            DiagnosticCode::HiddenArgument => "HiddenArgument",
            DiagnosticCode::AmbiguousNamedFunctionExpression => "AmbiguousNamedFunctionExpression",
            DiagnosticCode::StrictModeDuplicateArgument => "StrictModeDuplicateArgument",
            DiagnosticCode::StrictModeReservedWord => "StrictModeReservedWord",
        }
    }

    /// The severity a fresh diagnostic of this code carries before
    /// `Settings::warning_level` filtering.
    pub fn default_severity(self) -> Severity {
        match self {
            DiagnosticCode::DuplicateName
            | DiagnosticCode::StrictModeDuplicateArgument
            | DiagnosticCode::StrictModeReservedWord => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

/// Receives diagnostics emitted while `minify` runs. The core never decides
/// how diagnostics are displayed; that's this trait's job.
pub trait DiagnosticSink {
    fn report(&mut self, severity: Severity, code: DiagnosticCode, diagnostic: OxcDiagnostic);
}

/// Builds the [`OxcDiagnostic`] for a code, labeling the offending span, and
/// forwards it to `sink` if `warning_level` allows it through.
pub(crate) fn emit(
    sink: &mut dyn DiagnosticSink,
    warning_level: u8,
    code: DiagnosticCode,
    message: impl Into<std::borrow::Cow<'static, str>>,
    span: Span,
) {
    let severity = code.default_severity();
    let level = match severity {
        Severity::Fatal => 0,
        Severity::Error => 1,
        Severity::Warning => 2,
    };
    if level > warning_level {
        return;
    }
    let diagnostic = match severity {
        Severity::Fatal | Severity::Error => OxcDiagnostic::error(message),
        Severity::Warning => OxcDiagnostic::warn(message),
    }
    .with_label(span);
    sink.report(severity, code, diagnostic);
}

/// A [`DiagnosticSink`] that collects everything reported to it, useful for
/// tests and for library embedders who want to inspect diagnostics before
/// deciding how to render them.
#[derive(Debug, Default)]
pub struct VecDiagnosticSink {
    pub diagnostics: Vec<(Severity, DiagnosticCode, OxcDiagnostic)>,
}

impl DiagnosticSink for VecDiagnosticSink {
    fn report(&mut self, severity: Severity, code: DiagnosticCode, diagnostic: OxcDiagnostic) {
        self.diagnostics.push((severity, code, diagnostic));
    }
}

impl VecDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|(s, ..)| matches!(s, Severity::Fatal | Severity::Error))
    }
}
