// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The output serializer (§4.5): a visitor writing minified (or
//! pretty-printed) source text, threading the separator-insertion and
//! block-emission state machines described in §4.5.1/§4.5.3.

use std::fmt::Write as _;

use oxc_ast::ast::{Expression, Program, Statement, VariableDeclarationKind};
use oxc_span::Span;
use oxc_syntax::operator::UnaryOperator;

use super::precedence::{OperatorPrecedence, precedence_of};
use super::{numeric, strings};
use crate::rewrite::RewritePlan;
use crate::scope::arena::ScopeArena;
use crate::settings::{OutputMode, Settings};
use crate::sourcemap::{LineIndex, Segment, SourceMapSink};

/// Whether the statement/block currently being emitted wraps its body in
/// braces (§4.5.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockMode {
    NoBraces,
    Normal,
}

pub(crate) struct Serializer<'a, 'b> {
    out: &'a mut dyn std::fmt::Write,
    source: &'a str,
    line_index: LineIndex,
    sink: Option<&'b mut dyn SourceMapSink>,
    gen_line: u32,
    gen_col: u32,
    arena: &'a ScopeArena,
    plan: &'a RewritePlan,
    settings: &'a Settings,
    last_char: Option<char>,
    last_run_odd: bool,
    on_new_line: bool,
    indent_level: u32,
    block_mode: BlockMode,
}

impl<'a, 'b> Serializer<'a, 'b> {
    pub(crate) fn new(
        out: &'a mut dyn std::fmt::Write,
        source: &'a str,
        arena: &'a ScopeArena,
        plan: &'a RewritePlan,
        settings: &'a Settings,
        sink: Option<&'b mut dyn SourceMapSink>,
    ) -> Self {
        Self {
            out,
            source,
            line_index: LineIndex::new(source),
            sink,
            gen_line: 0,
            gen_col: 0,
            arena,
            plan,
            settings,
            last_char: None,
            last_run_odd: false,
            on_new_line: true,
            indent_level: 0,
            block_mode: BlockMode::Normal,
        }
    }

    /// Brackets `program`'s emission with the installed sink's file
    /// lifecycle (§4.6), if one is installed.
    pub(crate) fn run(&mut self, program: &Program, source_name: &str) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.start_file(source_name, Some(self.source));
        }
        self.program(program);
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.end_file();
        }
    }

    fn program(&mut self, program: &Program) {
        self.statement_list(&program.body);
        if self.settings.term_semicolons {
            self.token(";");
        }
    }

    // ---- §4.5.1 separator insertion -----------------------------------

    fn is_ident_part(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    /// Writes raw text with no separator logic, tracking the generated
    /// line/column the installed sink needs for its next `segment()` call.
    fn write_raw(&mut self, s: &str) {
        self.out.write_str(s).ok();
        for c in s.chars() {
            if c == '\n' {
                self.gen_line += 1;
                self.gen_col = 0;
            } else {
                self.gen_col += 1;
            }
        }
    }

    fn token(&mut self, s: &str) {
        self.token_at(s, None);
    }

    /// Like [`Self::token`], but when `span` is `Some` and a sink is
    /// installed, records a generated→original position mapping for the
    /// text about to be written (§4.6).
    fn token_at(&mut self, s: &str, span: Option<Span>) {
        if s.is_empty() {
            return;
        }
        let first = s.chars().next().unwrap();
        if let Some(last) = self.last_char {
            let need_space = (Self::is_ident_part(last) && Self::is_ident_part(first))
                || (last == '+' && first == '+' && self.last_run_odd)
                || (last == '-' && first == '-' && self.last_run_odd)
                || (last == '/' && first == '/');
            if need_space {
                self.write_raw(" ");
            }
        }
        if let (Some(span), Some(_)) = (span, self.sink.as_ref()) {
            let (original_line, original_column) = self.line_index.line_col(span.start);
            let generated_line = self.gen_line;
            let generated_column = self.gen_col;
            self.sink.as_deref_mut().unwrap().segment(Segment {
                generated_line,
                generated_column,
                source_index: 0,
                original_line,
                original_column,
                name: None,
            });
        }
        self.write_raw(s);
        let last = s.chars().next_back().unwrap();
        self.last_run_odd = s.chars().rev().take_while(|&c| c == last).count() % 2 == 1;
        self.last_char = Some(last);
        self.on_new_line = false;
    }

    /// Emits a binary/logical/assignment/ternary operator token, honoring
    /// `settings.operator_spaces`.
    fn operator_token(&mut self, op: &str) {
        if self.settings.operator_spaces {
            self.write_raw(" ");
            self.write_raw(op);
            self.write_raw(" ");
            self.last_char = Some(' ');
            self.last_run_odd = false;
            self.on_new_line = false;
        } else {
            self.token(op);
        }
    }

    fn newline_if_multiline(&mut self) {
        if matches!(self.settings.output_mode, OutputMode::MultiLine) {
            self.write_raw("\n");
            let indent = " ".repeat((self.indent_level * self.settings.indent_spaces) as usize);
            self.write_raw(&indent);
            self.on_new_line = true;
            self.last_char = None;
        }
    }

    // ---- §4.5.3 block & statement emission ----------------------------

    fn statement_list(&mut self, body: &oxc_allocator::Vec<Statement>) {
        for (i, stmt) in body.iter().enumerate() {
            if i > 0 && self.last_char != Some(';') && self.last_char != Some('{') {
                self.token(";");
            }
            self.statement(stmt);
        }
    }

    fn block(&mut self, body: &oxc_allocator::Vec<Statement>, mode: BlockMode) {
        if matches!(mode, BlockMode::NoBraces) && body.len() == 1 {
            self.statement(&body[0]);
            return;
        }
        self.token("{");
        self.indent_level += 1;
        self.newline_if_multiline();
        self.statement_list(body);
        self.indent_level -= 1;
        self.newline_if_multiline();
        self.token("}");
    }

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::ExpressionStatement(s) => {
                if expression_statement_head_needs_parens(&s.expression) {
                    self.token("(");
                    self.expression_inner(&s.expression);
                    self.token(")");
                } else {
                    self.expression(&s.expression, OperatorPrecedence::Sequence);
                }
            }
            Statement::BlockStatement(b) => self.block(&b.body, BlockMode::Normal),
            Statement::EmptyStatement(_) => {}
            Statement::VariableDeclaration(decl) => self.variable_declaration(decl),
            Statement::FunctionDeclaration(func) => self.function(func, true),
            Statement::ReturnStatement(s) => {
                self.token("return");
                if let Some(arg) = &s.argument {
                    self.expression(arg, OperatorPrecedence::Sequence);
                }
            }
            Statement::IfStatement(s) => {
                self.token("if");
                self.token("(");
                self.expression(&s.test, OperatorPrecedence::Sequence);
                self.token(")");
                let wraps_safari_hazard = self.settings.mac_safari_quirks && is_function_expression_stmt(&s.consequent);
                if wraps_safari_hazard {
                    self.token("{");
                    self.statement(&s.consequent);
                    self.token(";");
                    self.token("}");
                } else {
                    self.block_mode = BlockMode::NoBraces;
                    self.statement(&s.consequent);
                }
                if let Some(alt) = &s.alternate {
                    if self.last_char != Some(';') {
                        self.token(";");
                    }
                    self.token("else");
                    self.statement(alt);
                }
            }
            Statement::WhileStatement(s) => {
                self.token("while");
                self.token("(");
                self.expression(&s.test, OperatorPrecedence::Sequence);
                self.token(")");
                self.statement(&s.body);
            }
            Statement::DoWhileStatement(s) => {
                self.token("do");
                self.statement(&s.body);
                self.token("while");
                self.token("(");
                self.expression(&s.test, OperatorPrecedence::Sequence);
                self.token(")");
            }
            Statement::ForStatement(s) => {
                self.token("for");
                self.token("(");
                if let Some(init) = &s.init {
                    match init {
                        oxc_ast::ast::ForStatementInit::VariableDeclaration(decl) => {
                            self.variable_declaration_inline(decl)
                        }
                        expr => self.expression(expr.to_expression(), OperatorPrecedence::Sequence),
                    }
                }
                self.token(";");
                if let Some(test) = &s.test {
                    self.expression(test, OperatorPrecedence::Sequence);
                }
                self.token(";");
                if let Some(update) = &s.update {
                    self.expression(update, OperatorPrecedence::Sequence);
                }
                self.token(")");
                self.statement(&s.body);
            }
            Statement::ForInStatement(s) => {
                self.token("for");
                self.token("(");
                self.for_each_left(&s.left);
                self.token("in");
                self.expression(&s.right, OperatorPrecedence::Sequence);
                self.token(")");
                self.statement(&s.body);
            }
            Statement::ForOfStatement(s) => {
                self.token("for");
                self.token("(");
                self.for_each_left(&s.left);
                self.token("of");
                self.expression(&s.right, OperatorPrecedence::Sequence);
                self.token(")");
                self.statement(&s.body);
            }
            Statement::BreakStatement(s) => {
                self.token("break");
                if let Some(label) = &s.label {
                    self.token(label.name.as_str());
                }
            }
            Statement::ContinueStatement(s) => {
                self.token("continue");
                if let Some(label) = &s.label {
                    self.token(label.name.as_str());
                }
            }
            Statement::ThrowStatement(s) => {
                self.token("throw");
                self.expression(&s.argument, OperatorPrecedence::Sequence);
                self.token(";");
            }
            Statement::TryStatement(s) => {
                self.token("try");
                self.block(&s.block.body, BlockMode::Normal);
                if let Some(handler) = &s.handler {
                    self.token("catch");
                    if let Some(param) = &handler.param {
                        self.token("(");
                        self.binding_pattern_names(&param.pattern);
                        self.token(")");
                    }
                    self.block(&handler.body.body, BlockMode::Normal);
                }
                if let Some(finalizer) = &s.finalizer {
                    self.token("finally");
                    self.block(&finalizer.body, BlockMode::Normal);
                }
            }
            Statement::SwitchStatement(s) => {
                self.token("switch");
                self.token("(");
                self.expression(&s.discriminant, OperatorPrecedence::Sequence);
                self.token(")");
                self.token("{");
                for case in s.cases.iter() {
                    if let Some(test) = &case.test {
                        self.token("case");
                        self.expression(test, OperatorPrecedence::Sequence);
                    } else {
                        self.token("default");
                    }
                    self.token(":");
                    self.block_mode = BlockMode::NoBraces;
                    self.statement_list(&case.consequent);
                }
                self.token("}");
            }
            Statement::LabeledStatement(s) => {
                self.token(s.label.name.as_str());
                self.token(":");
                self.statement(&s.body);
            }
            Statement::WithStatement(s) => {
                self.token("with");
                self.token("(");
                self.expression(&s.object, OperatorPrecedence::Sequence);
                self.token(")");
                self.statement(&s.body);
            }
            Statement::DebuggerStatement(_) => self.token("debugger"),
            Statement::ClassDeclaration(class) => self.class(class),
            _ => {}
        }
    }

    fn for_each_left(&mut self, left: &oxc_ast::ast::ForStatementLeft) {
        match left {
            oxc_ast::ast::ForStatementLeft::VariableDeclaration(decl) => {
                self.token(var_keyword(decl.kind));
                if let Some(d) = decl.declarations.first() {
                    self.binding_pattern_names(&d.id);
                }
            }
            expr => self.expression(expr.to_expression(), OperatorPrecedence::Assignment),
        }
    }

    fn variable_declaration(&mut self, decl: &oxc_ast::ast::VariableDeclaration) {
        self.variable_declaration_inline(decl);
    }

    fn variable_declaration_inline(&mut self, decl: &oxc_ast::ast::VariableDeclaration) {
        let live: Vec<_> = decl
            .declarations
            .iter()
            .filter(|d| !self.plan.deleted_decl_spans.contains(&d.span))
            .collect();
        if live.is_empty() {
            return;
        }
        self.token(var_keyword(decl.kind));
        for (i, d) in live.iter().enumerate() {
            if i > 0 {
                self.token(",");
            }
            self.binding_pattern_names(&d.id);
            if let Some(init) = &d.init {
                self.token("=");
                self.expression(init, OperatorPrecedence::Assignment);
            }
        }
    }

    fn binding_pattern_names(&mut self, pattern: &oxc_ast::ast::BindingPattern) {
        use oxc_ast::ast::BindingPatternKind;
        match &pattern.kind {
            BindingPatternKind::BindingIdentifier(id) => {
                let name = self
                    .arena
                    .reference_at(id.span)
                    .and_then(|r| r.binding)
                    .map(|b| self.arena.binding(b).effective_name().to_string())
                    .unwrap_or_else(|| id.name.as_str().to_string());
                self.token_at(&name, Some(id.span));
            }
            BindingPatternKind::AssignmentPattern(a) => {
                self.binding_pattern_names(&a.left);
                self.token("=");
                self.expression(&a.right, OperatorPrecedence::Assignment);
            }
            BindingPatternKind::ArrayPattern(arr) => {
                self.token("[");
                for (i, el) in arr.elements.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    if let Some(el) = el {
                        self.binding_pattern_names(el);
                    }
                }
                self.token("]");
            }
            BindingPatternKind::ObjectPattern(obj) => {
                self.token("{");
                for (i, prop) in obj.properties.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    self.binding_pattern_names(&prop.value);
                }
                self.token("}");
            }
        }
    }

    fn function(&mut self, func: &oxc_ast::ast::Function, _is_declaration: bool) {
        self.token("function");
        if let Some(id) = &func.id {
            let name = self.effective_name_of(id.span, id.name.as_str());
            self.token_at(&name, Some(id.span));
        }
        self.token("(");
        for (i, param) in func.params.items.iter().enumerate() {
            if i > 0 {
                self.token(",");
            }
            self.binding_pattern_names(&param.pattern);
        }
        self.token(")");
        if let Some(body) = &func.body {
            self.block(&body.statements, BlockMode::Normal);
        } else {
            self.token(";");
        }
    }

    fn class(&mut self, class: &oxc_ast::ast::Class) {
        self.token("class");
        if let Some(id) = &class.id {
            self.token_at(id.name.as_str(), Some(id.span));
        }
        if let Some(sup) = &class.super_class {
            self.token("extends");
            self.expression(sup, OperatorPrecedence::LeftHandSide);
        }
        self.token("{");
        for element in class.body.body.iter() {
            if let oxc_ast::ast::ClassElement::MethodDefinition(m) = element {
                self.function(&m.value, false);
            }
        }
        self.token("}");
    }

    fn effective_name_of(&self, span: Span, fallback: &str) -> String {
        self.arena
            .reference_at(span)
            .and_then(|r| r.binding)
            .map(|b| self.arena.binding(b).effective_name().to_string())
            .unwrap_or_else(|| fallback.to_string())
    }

    // ---- §4.5.2 parenthesization / §4.5.4 hazards --------------------

    fn expression(&mut self, expr: &Expression, context: OperatorPrecedence) {
        if self.maybe_rewrite_boolean(expr) {
            return;
        }
        let own = precedence_of(expr);
        let needs_parens = own < context;
        if needs_parens {
            self.token("(");
        }
        self.expression_inner(expr);
        if needs_parens {
            self.token(")");
        }
    }

    fn maybe_rewrite_boolean(&mut self, expr: &Expression) -> bool {
        if let Expression::BooleanLiteral(lit) = expr {
            if self.plan.rewrite_as_bang_number.contains(&lit.span) {
                self.token(if lit.value { "!0" } else { "!1" });
                return true;
            }
        }
        false
    }

    fn expression_inner(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(ident) => {
                let name = self.effective_name_of(ident.span, ident.name.as_str());
                self.token_at(&name, Some(ident.span));
            }
            Expression::BooleanLiteral(lit) => self.token(if lit.value { "true" } else { "false" }),
            Expression::NullLiteral(_) => self.token("null"),
            Expression::NumericLiteral(lit) => self.token(&numeric::format_number(lit.value)),
            Expression::StringLiteral(lit) => {
                self.token(&strings::escape_string(lit.value.as_str(), self.settings.inline_safe_strings))
            }
            Expression::RegExpLiteral(lit) => self.token(&format!("/{}/{}", lit.regex.pattern.text, lit.regex.flags)),
            Expression::TemplateLiteral(t) => {
                self.token("`");
                for (i, quasi) in t.quasis.iter().enumerate() {
                    self.write_raw(quasi.value.raw.as_str());
                    if let Some(expr) = t.expressions.get(i) {
                        self.write_raw("${");
                        self.expression(expr, OperatorPrecedence::Sequence);
                        self.write_raw("}");
                    }
                }
                self.token("`");
            }
            Expression::ArrayExpression(a) => {
                self.token("[");
                for (i, el) in a.elements.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    if let Some(expr) = el.as_expression() {
                        self.expression(expr, OperatorPrecedence::Assignment);
                    }
                }
                self.token("]");
            }
            Expression::ObjectExpression(o) => {
                self.token("{");
                for (i, prop) in o.properties.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    if let oxc_ast::ast::ObjectPropertyKind::ObjectProperty(p) = prop {
                        self.expression(&p.value, OperatorPrecedence::Assignment);
                    }
                }
                self.token("}");
            }
            Expression::SequenceExpression(s) => {
                for (i, e) in s.expressions.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    self.expression(e, OperatorPrecedence::Assignment);
                }
            }
            Expression::AssignmentExpression(a) => {
                self.assignment_target(&a.left);
                self.operator_token(a.operator.as_str());
                self.expression(&a.right, OperatorPrecedence::Assignment);
            }
            Expression::ConditionalExpression(c) => {
                self.expression(&c.test, OperatorPrecedence::NullishCoalescing);
                self.operator_token("?");
                self.expression(&c.consequent, OperatorPrecedence::Assignment);
                self.operator_token(":");
                self.expression(&c.alternate, OperatorPrecedence::Assignment);
            }
            Expression::LogicalExpression(b) => {
                let own = precedence_of(expr);
                self.expression(&b.left, own);
                self.operator_token(b.operator.as_str());
                self.expression(&b.right, bump(own));
            }
            Expression::BinaryExpression(b) => {
                let own = precedence_of(expr);
                self.expression(&b.left, own);
                self.operator_token(b.operator.as_str());
                self.expression(&b.right, bump(own));
            }
            Expression::UnaryExpression(u) => {
                self.token(u.operator.as_str());
                if matches!(u.operator, UnaryOperator::Typeof | UnaryOperator::Void | UnaryOperator::Delete) {
                    self.token(" ");
                }
                self.expression(&u.argument, OperatorPrecedence::Unary);
            }
            Expression::UpdateExpression(u) => {
                if u.prefix {
                    self.token(u.operator.as_str());
                    self.simple_target(&u.argument);
                } else {
                    self.simple_target(&u.argument);
                    self.token(u.operator.as_str());
                }
            }
            Expression::CallExpression(c) => {
                self.callee_guard(&c.callee);
                self.token("(");
                for (i, arg) in c.arguments.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    if let Some(e) = arg.as_expression() {
                        self.expression(e, OperatorPrecedence::Assignment);
                    }
                }
                self.token(")");
            }
            Expression::NewExpression(n) => {
                self.token("new");
                self.expression(&n.callee, OperatorPrecedence::Member);
                self.token("(");
                for (i, arg) in n.arguments.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    if let Some(e) = arg.as_expression() {
                        self.expression(e, OperatorPrecedence::Assignment);
                    }
                }
                self.token(")");
            }
            Expression::StaticMemberExpression(m) => {
                self.member_base_guard(&m.object);
                self.token(".");
                self.token(m.property.name.as_str());
            }
            Expression::ComputedMemberExpression(m) => {
                self.member_base_guard(&m.object);
                self.token("[");
                self.expression(&m.expression, OperatorPrecedence::Sequence);
                self.token("]");
            }
            Expression::FunctionExpression(func) => self.function(func, false),
            Expression::ArrowFunctionExpression(func) => {
                self.token("(");
                for (i, param) in func.params.items.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    self.binding_pattern_names(&param.pattern);
                }
                self.token(")");
                self.token("=>");
                if func.expression {
                    if let Some(Statement::ExpressionStatement(s)) = func.body.statements.first() {
                        self.expression(&s.expression, OperatorPrecedence::Assignment);
                    }
                } else {
                    self.block(&func.body.statements, BlockMode::Normal);
                }
            }
            Expression::ClassExpression(class) => self.class(class),
            Expression::ParenthesizedExpression(p) => self.expression_inner(&p.expression),
            Expression::AwaitExpression(a) => {
                self.token("await");
                self.expression(&a.argument, OperatorPrecedence::Unary);
            }
            Expression::YieldExpression(y) => {
                self.token("yield");
                if y.delegate {
                    self.token("*");
                }
                if let Some(arg) = &y.argument {
                    self.expression(arg, OperatorPrecedence::Assignment);
                }
            }
            Expression::ThisExpression(_) => self.token("this"),
            _ => {}
        }
    }

    fn simple_target(&mut self, target: &oxc_ast::ast::SimpleAssignmentTarget) {
        if let Some(expr) = target.as_expression() {
            self.expression(expr, OperatorPrecedence::Unary);
        } else if let oxc_ast::ast::SimpleAssignmentTarget::AssignmentTargetIdentifier(ident) = target {
            let name = self.effective_name_of(ident.span, ident.name.as_str());
            self.token_at(&name, Some(ident.span));
        }
    }

    fn assignment_target(&mut self, target: &oxc_ast::ast::AssignmentTarget) {
        if let oxc_ast::ast::AssignmentTarget::AssignmentTargetIdentifier(ident) = target {
            let name = self.effective_name_of(ident.span, ident.name.as_str());
            self.token_at(&name, Some(ident.span));
        } else if let Some(expr) = target.as_expression() {
            self.expression(expr, OperatorPrecedence::LeftHandSide);
        }
    }

    /// Member-access base hazards (§4.5.2): a bare pure-decimal-integer
    /// numeric literal needs parens before `.prop` (`5.toString` is a parse
    /// error; `5..toString`/`(5).toString` are not), and a lower-precedence
    /// expression needs parens as any member base does.
    fn member_base_guard(&mut self, base: &Expression) {
        let needs_parens = match base {
            Expression::NumericLiteral(lit) => lit.raw.map(|r| !r.contains('.') && !r.contains(['x', 'X', 'e', 'E'])).unwrap_or(false),
            _ => precedence_of(base) < OperatorPrecedence::Member,
        };
        if needs_parens {
            self.token("(");
            self.expression_inner(base);
            self.token(")");
        } else {
            self.expression(base, OperatorPrecedence::Member);
        }
    }

    /// `new`-of-a-call-expression and bare-`new` hazards (§4.5.2): calling
    /// the result of a `new` expression without its own argument list must
    /// be parenthesized so the `(...)` isn't read as the `new`'s arguments.
    fn callee_guard(&mut self, callee: &Expression) {
        let needs_parens = matches!(callee, Expression::NewExpression(n) if n.arguments.is_empty())
            || precedence_of(callee) < OperatorPrecedence::LeftHandSide;
        if needs_parens {
            self.token("(");
            self.expression_inner(callee);
            self.token(")");
        } else {
            self.expression(callee, OperatorPrecedence::LeftHandSide);
        }
    }
}

fn bump(p: OperatorPrecedence) -> OperatorPrecedence {
    use OperatorPrecedence::*;
    match p {
        Sequence => Assignment,
        Assignment => Conditional,
        Conditional => NullishCoalescing,
        NullishCoalescing => LogicalOr,
        LogicalOr => LogicalAnd,
        LogicalAnd => BitwiseOr,
        BitwiseOr => BitwiseXor,
        BitwiseXor => BitwiseAnd,
        BitwiseAnd => Equality,
        Equality => Relational,
        Relational => Shift,
        Shift => Additive,
        Additive => Multiplicative,
        Multiplicative => Exponentiation,
        Exponentiation => Unary,
        Unary => Update,
        Update => LeftHandSide,
        LeftHandSide => Member,
        Member => Primary,
        Primary => Primary,
    }
}

fn var_keyword(kind: VariableDeclarationKind) -> &'static str {
    match kind {
        VariableDeclarationKind::Var => "var",
        VariableDeclarationKind::Let => "let",
        VariableDeclarationKind::Const => "const",
        _ => "var",
    }
}

fn is_function_expression_stmt(stmt: &Statement) -> bool {
    matches!(
        stmt,
        Statement::ExpressionStatement(s) if matches!(s.expression, Expression::FunctionExpression(_))
    )
}

/// Walks the leftmost edge of a callee/member-access chain, through any
/// source parentheses, to the expression whose first token is actually
/// written out first — `(function(){})().x` starts with `(`, not `x`, but
/// the hazard lives with the `FunctionExpression` at the bottom of the
/// chain, not with the `CallExpression` or `StaticMemberExpression` wrapping
/// it.
fn leftmost_leaf<'a, 'b>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(p) => leftmost_leaf(&p.expression),
        Expression::CallExpression(c) => leftmost_leaf(&c.callee),
        Expression::NewExpression(n) => leftmost_leaf(&n.callee),
        Expression::StaticMemberExpression(m) => leftmost_leaf(&m.object),
        Expression::ComputedMemberExpression(m) => leftmost_leaf(&m.object),
        _ => expr,
    }
}

/// Automatic-semicolon-insertion hazard (§4.5.4): an expression statement
/// beginning with `function`, `{`, or `class` would otherwise be parsed as a
/// declaration or block by a naive reader of the output.
fn expression_statement_head_needs_parens(expr: &Expression) -> bool {
    matches!(
        leftmost_leaf(expr),
        Expression::FunctionExpression(_) | Expression::ObjectExpression(_) | Expression::ClassExpression(_)
    )
}
