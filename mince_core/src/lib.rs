// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scope resolution, renaming, and source serialization for a JavaScript
//! minifier.
//!
//! This crate consumes an [`oxc_ast::ast::Program`] produced by an external
//! parser and re-emits a semantically equivalent, textually smaller program.
//! It never parses source text itself and it never evaluates JavaScript: the
//! [`minify`] entry point is a single-threaded, non-reentrant pipeline over
//! an already-parsed tree.

mod diagnostics;
mod minify;
mod rename;
mod rewrite;
mod scope;
mod serialize;
mod settings;
mod sourcemap;

pub use diagnostics::{DiagnosticCode, DiagnosticSink, Severity, VecDiagnosticSink};
pub use minify::{Fatal, minify};
pub use settings::{Format, LocalRenaming, OutputMode, RenamePair, Settings, StrictMode};
pub use sourcemap::{LegacyXmlSourceMapSink, SourceMapSink, V3SourceMapSink};

pub(crate) use scope::binding::{Binding, BindingCategory, BindingId};
pub(crate) use scope::environment::{Environment, EnvironmentKind, EnvironmentId};
