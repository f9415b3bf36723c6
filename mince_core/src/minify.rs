// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`minify`]: the single entry point tying the resolver, rewriter,
//! renamer, and serializer together (§6, §7).

use ahash::AHashSet;
use oxc_ast::ast::{Expression, Program, Statement};
use oxc_span::{Atom, Span};

use crate::diagnostics::DiagnosticSink;
use crate::rename;
use crate::rewrite;
use crate::scope::resolver;
use crate::settings::{Format, Settings};
use crate::sourcemap::SourceMapSink;

/// A fatal condition: the accepted AST shape was violated. Only reachable
/// if a caller hand-builds an invalid `Program` rather than going through
/// `oxc_parser` (§7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fatal;

impl std::fmt::Display for Fatal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("minify: fatal: input AST violates the accepted shape")
    }
}

impl std::error::Error for Fatal {}

/// Minifies `program` in place according to `settings`, writing the
/// minified text to `output` and optionally recording a source map through
/// `source_map`. Single-threaded, non-reentrant, no internal parallelism
/// (§5). Returns `Err(Fatal)` only when the AST shape itself is invalid;
/// every other problem is reported through `diagnostics` and does not
/// prevent output.
#[allow(clippy::too_many_arguments)]
pub fn minify<'ast>(
    program: &Program<'ast>,
    source: &str,
    source_name: &str,
    settings: &Settings,
    known_globals: &std::collections::HashSet<Atom<'ast>>,
    diagnostics: &mut dyn DiagnosticSink,
    output: &mut dyn std::fmt::Write,
    source_map: Option<&mut dyn SourceMapSink>,
) -> Result<(), Fatal> {
    if matches!(settings.format, Format::Json) {
        validate_json_shape(program)?;
    }

    let known: AHashSet<Atom<'ast>> = known_globals.iter().cloned().collect();
    let result = resolver::resolve(program, settings, &known, diagnostics);
    let mut arena = result.arena;

    let boolean_spans = collect_boolean_literals(program);
    let plan = rewrite::plan(&mut arena, settings, &boolean_spans);

    rename::rename_all(&mut arena, settings);

    let mut buffer = String::new();
    crate::serialize::serialize(program, source, source_name, &arena, &plan, settings, &mut buffer, source_map);

    output.write_str(&buffer).map_err(|_| Fatal)?;
    Ok(())
}

fn validate_json_shape(program: &Program) -> Result<(), Fatal> {
    if program.body.len() != 1 {
        return Err(Fatal);
    }
    let Statement::ExpressionStatement(stmt) = &program.body[0] else {
        return Err(Fatal);
    };
    is_json_expression(&stmt.expression).then_some(()).ok_or(Fatal)
}

fn is_json_expression(expr: &Expression) -> bool {
    match expr {
        Expression::ParenthesizedExpression(p) => is_json_expression(&p.expression),
        Expression::StringLiteral(_)
        | Expression::NumericLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_) => true,
        Expression::UnaryExpression(u) => {
            matches!(u.operator, oxc_syntax::operator::UnaryOperator::UnaryNegation)
                && matches!(u.argument, Expression::NumericLiteral(_))
        }
        Expression::ArrayExpression(a) => a
            .elements
            .iter()
            .all(|el| el.as_expression().map(is_json_expression).unwrap_or(false)),
        Expression::ObjectExpression(o) => o.properties.iter().all(|prop| {
            matches!(prop, oxc_ast::ast::ObjectPropertyKind::ObjectProperty(p) if is_json_expression(&p.value))
        }),
        _ => false,
    }
}

fn collect_boolean_literals(program: &Program) -> Vec<(Span, bool)> {
    let mut out = Vec::new();
    for stmt in program.body.iter() {
        collect_in_statement(stmt, &mut out);
    }
    out
}

fn collect_in_statement(stmt: &Statement, out: &mut Vec<(Span, bool)>) {
    match stmt {
        Statement::ExpressionStatement(s) => collect_in_expression(&s.expression, out),
        Statement::BlockStatement(b) => {
            for s in b.body.iter() {
                collect_in_statement(s, out);
            }
        }
        Statement::IfStatement(s) => {
            collect_in_expression(&s.test, out);
            collect_in_statement(&s.consequent, out);
            if let Some(alt) = &s.alternate {
                collect_in_statement(alt, out);
            }
        }
        Statement::ReturnStatement(s) => {
            if let Some(arg) = &s.argument {
                collect_in_expression(arg, out);
            }
        }
        Statement::VariableDeclaration(decl) => {
            for d in decl.declarations.iter() {
                if let Some(init) = &d.init {
                    collect_in_expression(init, out);
                }
            }
        }
        _ => {}
    }
}

fn collect_in_expression(expr: &Expression, out: &mut Vec<(Span, bool)>) {
    match expr {
        Expression::BooleanLiteral(lit) => out.push((lit.span, lit.value)),
        Expression::BinaryExpression(b) => {
            collect_in_expression(&b.left, out);
            collect_in_expression(&b.right, out);
        }
        Expression::LogicalExpression(b) => {
            collect_in_expression(&b.left, out);
            collect_in_expression(&b.right, out);
        }
        Expression::ConditionalExpression(c) => {
            collect_in_expression(&c.test, out);
            collect_in_expression(&c.consequent, out);
            collect_in_expression(&c.alternate, out);
        }
        Expression::CallExpression(c) => {
            for arg in c.arguments.iter() {
                if let Some(e) = arg.as_expression() {
                    collect_in_expression(e, out);
                }
            }
        }
        _ => {}
    }
}
