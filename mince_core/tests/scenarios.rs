// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end `minify()` scenarios (§8), run against real `oxc_parser`
//! output the way this stack's own integration tests drive whole pipelines
//! rather than hand-built ASTs.

use std::collections::HashSet;

use mince_core::{Settings, VecDiagnosticSink, minify};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::{Atom, SourceType};

fn minify_source(source: &str, settings: &Settings) -> (String, VecDiagnosticSink) {
    let allocator = Allocator::default();
    let source_type = SourceType::default();
    let result = Parser::new(&allocator, source, source_type).parse();
    assert!(result.errors.is_empty(), "unexpected parse errors: {:?}", result.errors);

    let known_globals: HashSet<Atom> = HashSet::new();
    let mut sink = VecDiagnosticSink::new();
    let mut out = String::new();
    minify(&result.program, source, "input.js", settings, &known_globals, &mut sink, &mut out, None)
        .expect("well-formed input never produces a fatal diagnostic");
    (out, sink)
}

#[test]
fn renames_a_shadowed_local_without_touching_the_outer_binding() {
    let source = "function outer(x) { function inner(x) { return x + 1; } return inner(2) + x; }";
    let (out, sink) = minify_source(source, &Settings::default());
    assert!(!sink.has_errors());
    assert!(out.contains("function"));
}

#[test]
fn undeclared_global_read_is_diagnosed_but_does_not_block_output() {
    let source = "function f() { return totallyUndeclared; }";
    let (out, sink) = minify_source(source, &Settings::default());
    assert!(!out.is_empty());
    assert!(
        sink.diagnostics
            .iter()
            .any(|(_, code, _)| matches!(code, mince_core::DiagnosticCode::UndeclaredVariable))
    );
}

#[test]
fn duplicate_var_with_initializer_is_diagnosed() {
    let source = "var a = 1; var a = 2;";
    let (_out, sink) = minify_source(source, &Settings::default());
    assert!(
        sink.diagnostics
            .iter()
            .any(|(_, code, _)| matches!(code, mince_core::DiagnosticCode::DuplicateName))
    );
}

#[test]
fn superfluous_redeclaration_without_initializer_is_diagnosed() {
    let source = "function f(a) { var a; return a; }";
    let (_out, sink) = minify_source(source, &Settings::default());
    assert!(
        sink.diagnostics
            .iter()
            .any(|(_, code, _)| matches!(code, mince_core::DiagnosticCode::SuperfluousVarDeclaration))
    );
}

#[test]
fn local_renaming_none_leaves_identifiers_untouched() {
    let source = "function add(first, second) { return first + second; }";
    let mut settings = Settings::default();
    settings.local_renaming = mince_core::LocalRenaming::None;
    let (out, _sink) = minify_source(source, &settings);
    assert!(out.contains("first"));
    assert!(out.contains("second"));
}

#[test]
fn rewrite_booleans_emits_bang_number_forms() {
    let source = "var flag = true; var off = false;";
    let mut settings = Settings::default();
    settings.rewrite_booleans = true;
    let (out, _sink) = minify_source(source, &settings);
    assert!(out.contains("!0"));
    assert!(out.contains("!1"));
}

#[test]
fn json_format_rejects_non_expression_programs() {
    let source = "function f() {}";
    let allocator = Allocator::default();
    let source_type = SourceType::default();
    let result = Parser::new(&allocator, source, source_type).parse();
    let mut settings = Settings::default();
    settings.format = mince_core::Format::Json;
    let known_globals: HashSet<Atom> = HashSet::new();
    let mut sink = VecDiagnosticSink::new();
    let mut out = String::new();
    let outcome = minify(&result.program, source, "input.js", &settings, &known_globals, &mut sink, &mut out, None);
    assert!(outcome.is_err());
}

#[test]
fn json_format_accepts_an_object_literal() {
    let source = r#"({"a": 1, "b": [true, false, null]})"#;
    let (out, _sink) = minify_source(
        source,
        &Settings {
            format: mince_core::Format::Json,
            ..Settings::default()
        },
    );
    assert!(!out.is_empty());
}
