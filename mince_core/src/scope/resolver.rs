// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The scope resolver (§4.2): a two-phase, manual match-based recursive
//! visit over `oxc_ast::ast`. This stack does not lean on a generic `Visit`
//! trait for syntax-directed analyses — its own `LexicallyDeclaredNames`/
//! `BoundNames` traits are hand-written recursive matches over the AST
//! enums, and the resolver follows that same idiom rather than pulling in
//! `oxc_ast::Visit`.

use oxc_allocator::Vec as ArenaVec;
use oxc_ast::ast::{
    ArrowFunctionExpression, BindingPattern, BindingPatternKind, CatchClause, Class, Declaration,
    Expression, Function, FunctionBody, Program, Statement, VariableDeclarationKind,
};
use oxc_span::{Atom, Span};

use super::arena::ScopeArena;
use super::binding::{BindingCategory, RefType};
use super::environment::{EnvironmentId, EnvironmentKind};
use crate::diagnostics::{DiagnosticCode, DiagnosticSink, emit};
use crate::settings::{Settings, StrictMode};

/// Output of resolution: the populated arena plus the environment that
/// should be handed to the renamer as the function/program's own scope.
pub(crate) struct ResolveResult {
    pub arena: ScopeArena,
}

struct Resolver<'a, 'ast> {
    arena: ScopeArena,
    settings: &'a Settings,
    known_globals: &'a ahash::AHashSet<Atom<'ast>>,
    diagnostics: &'a mut dyn DiagnosticSink,
    env_stack: Vec<EnvironmentId>,
}

pub(crate) fn resolve<'ast>(
    program: &Program<'ast>,
    settings: &Settings,
    known_globals: &ahash::AHashSet<Atom<'ast>>,
    diagnostics: &mut dyn DiagnosticSink,
) -> ResolveResult {
    let mut resolver = Resolver {
        arena: ScopeArena::new(),
        settings,
        known_globals,
        diagnostics,
        env_stack: Vec::new(),
    };
    let global = resolver.arena.global;
    if matches!(settings.strict_mode, StrictMode::On) {
        resolver.arena.env_mut(global).use_strict = true;
    }
    resolver.env_stack.push(global);
    resolver.run_body(&program.body, global, false);
    resolver.env_stack.pop();
    ResolveResult {
        arena: resolver.arena,
    }
}

impl<'a, 'ast> Resolver<'a, 'ast> {
    fn current(&self) -> EnvironmentId {
        *self.env_stack.last().expect("env stack never empty during a visit")
    }

    fn is_strict_here(&self) -> bool {
        self.env_stack
            .iter()
            .rev()
            .any(|e| self.arena.env(*e).use_strict)
            || matches!(self.settings.strict_mode, StrictMode::On)
    }

    /// Runs both phases of §4.2 over one function/program body.
    fn run_body(&mut self, body: &ArenaVec<'ast, Statement<'ast>>, env: EnvironmentId, is_function_scope: bool) {
        self.apply_directive_prologue(body, env);
        self.collect_declarations(body, env, is_function_scope);
        for stmt in body.iter() {
            self.visit_statement(stmt);
        }
        self.finish_body(env);
    }

    fn apply_directive_prologue(&mut self, body: &ArenaVec<'ast, Statement<'ast>>, env: EnvironmentId) {
        if matches!(self.settings.strict_mode, StrictMode::Off) {
            return;
        }
        for stmt in body.iter() {
            let Statement::ExpressionStatement(expr_stmt) = stmt else {
                break;
            };
            let Expression::StringLiteral(lit) = &expr_stmt.expression else {
                break;
            };
            if lit.value.as_str() == "use strict" {
                self.arena.env_mut(env).use_strict = true;
            }
        }
    }

    // ---- Phase A: declaration collection (§4.2) ----------------------

    fn collect_declarations(
        &mut self,
        body: &ArenaVec<'ast, Statement<'ast>>,
        env: EnvironmentId,
        is_function_scope: bool,
    ) {
        // 1. Bind every function declaration in order.
        for stmt in body.iter() {
            if let Statement::FunctionDeclaration(func) = stmt {
                if let Some(id) = &func.id {
                    self.declare(env, id.name.as_str(), BindingCategory::Normal, id.span, Some(func.span));
                }
            }
        }
        // 2. `arguments` binding, function scopes only.
        if is_function_scope && !self.arena.env(env).has_binding("arguments") {
            let strict = self.arena.env(env).use_strict;
            let id = self.arena.create_mutable_binding(
                env,
                "arguments",
                BindingCategory::Arguments,
                Span::default(),
            );
            let binding = self.arena.binding_mut(id);
            binding.is_generated = true;
            binding.is_mutable = !strict;
            binding.is_initialized = true;
        }
        // 3. Bind every `var` declaration (recursing into nested blocks,
        // but not into nested function bodies).
        self.collect_vars_in_statements(body, env);
    }

    fn collect_vars_in_statements(&mut self, body: &ArenaVec<'ast, Statement<'ast>>, env: EnvironmentId) {
        for stmt in body.iter() {
            self.collect_vars_in_statement(stmt, env);
        }
    }

    fn collect_vars_in_statement(&mut self, stmt: &Statement<'ast>, env: EnvironmentId) {
        match stmt {
            Statement::VariableDeclaration(decl) => {
                if decl.kind == VariableDeclarationKind::Var {
                    for declarator in decl.declarations.iter() {
                        self.bind_pattern_as_var(&declarator.id, env, declarator.init.is_some());
                    }
                }
            }
            Statement::BlockStatement(block) => self.collect_vars_in_statements(&block.body, env),
            Statement::IfStatement(s) => {
                self.collect_vars_in_statement(&s.consequent, env);
                if let Some(alt) = &s.alternate {
                    self.collect_vars_in_statement(alt, env);
                }
            }
            Statement::ForStatement(s) => {
                if let Some(oxc_ast::ast::ForStatementInit::VariableDeclaration(decl)) = &s.init {
                    if decl.kind == VariableDeclarationKind::Var {
                        for d in decl.declarations.iter() {
                            self.bind_pattern_as_var(&d.id, env, d.init.is_some());
                        }
                    }
                }
                self.collect_vars_in_statement(&s.body, env);
            }
            Statement::ForInStatement(s) => {
                if let oxc_ast::ast::ForStatementLeft::VariableDeclaration(decl) = &s.left {
                    if decl.kind == VariableDeclarationKind::Var {
                        for d in decl.declarations.iter() {
                            self.bind_pattern_as_var(&d.id, env, true);
                        }
                    }
                }
                self.collect_vars_in_statement(&s.body, env);
            }
            Statement::ForOfStatement(s) => {
                if let oxc_ast::ast::ForStatementLeft::VariableDeclaration(decl) = &s.left {
                    if decl.kind == VariableDeclarationKind::Var {
                        for d in decl.declarations.iter() {
                            self.bind_pattern_as_var(&d.id, env, true);
                        }
                    }
                }
                self.collect_vars_in_statement(&s.body, env);
            }
            Statement::WhileStatement(s) => self.collect_vars_in_statement(&s.body, env),
            Statement::DoWhileStatement(s) => self.collect_vars_in_statement(&s.body, env),
            Statement::TryStatement(s) => {
                self.collect_vars_in_statements(&s.block.body, env);
                if let Some(handler) = &s.handler {
                    self.collect_vars_in_statements(&handler.body.body, env);
                }
                if let Some(finalizer) = &s.finalizer {
                    self.collect_vars_in_statements(&finalizer.body, env);
                }
            }
            Statement::SwitchStatement(s) => {
                for case in s.cases.iter() {
                    self.collect_vars_in_statements(&case.consequent, env);
                }
            }
            Statement::LabeledStatement(s) => self.collect_vars_in_statement(&s.body, env),
            Statement::WithStatement(s) => self.collect_vars_in_statement(&s.body, env),
            // Function/class declarations, lexical declarations, and
            // expression-only statements introduce no `var` bindings here.
            _ => {}
        }
    }

    fn bind_pattern_as_var(&mut self, pattern: &BindingPattern<'ast>, env: EnvironmentId, has_init: bool) {
        for (name, span) in pattern_names(pattern) {
            self.declare_var(env, &name, span, has_init);
        }
    }

    fn declare_var(&mut self, env: EnvironmentId, name: &str, span: Span, has_init: bool) {
        if let Some(existing) = self.arena.env(env).try_get_binding(name) {
            let category = self.arena.binding(existing).category;
            match category {
                BindingCategory::NamedFunctionExpression if has_init => {
                    // init == NFE is indistinguishable from init != NFE at
                    // this layer without re-inspecting the initializer
                    // expression kind; treat any initializer as overwriting.
                    self.arena.binding_mut(existing).ambiguous_value_span =
                        Some(self.arena.binding(existing).definition_context);
                    self.arena.binding_mut(existing).value_span = Some(span);
                }
                BindingCategory::NamedFunctionExpression => {
                    self.arena.binding_mut(existing).category = BindingCategory::Normal;
                }
                _ if has_init => {
                    emit(
                        self.diagnostics,
                        self.settings.warning_level,
                        DiagnosticCode::DuplicateName,
                        format!("'{name}' is already declared"),
                        span,
                    );
                }
                _ => {
                    emit(
                        self.diagnostics,
                        self.settings.warning_level,
                        DiagnosticCode::SuperfluousVarDeclaration,
                        format!("redundant declaration of '{name}'"),
                        span,
                    );
                }
            }
            return;
        }
        self.arena
            .create_mutable_binding(env, name, BindingCategory::Normal, span);
    }

    fn declare(
        &mut self,
        env: EnvironmentId,
        name: &str,
        category: BindingCategory,
        span: Span,
        value_span: Option<Span>,
    ) {
        if let Some(existing) = self.arena.env(env).try_get_binding(name) {
            let existing_category = self.arena.binding(existing).category;
            match existing_category {
                BindingCategory::NamedFunctionExpression | BindingCategory::Predefined => {
                    self.arena.binding_mut(existing).category = BindingCategory::Normal;
                    self.arena.binding_mut(existing).value_span = value_span;
                }
                BindingCategory::Normal => {
                    emit(
                        self.diagnostics,
                        self.settings.warning_level,
                        DiagnosticCode::DuplicateName,
                        format!("'{name}' is already declared"),
                        span,
                    );
                }
                _ => {
                    self.arena.binding_mut(existing).category = BindingCategory::Normal;
                }
            }
            return;
        }
        let id = self.arena.create_mutable_binding(env, name, category, span);
        self.arena.binding_mut(id).value_span = value_span;
        self.arena.binding_mut(id).is_initialized = true;
    }

    fn finish_body(&mut self, env: EnvironmentId) {
        let defined: Vec<_> = self.arena.env(env).defined.clone();
        for id in &defined {
            let binding = self.arena.binding(*id);
            if binding.reference_count == 0 && binding.category == BindingCategory::Normal {
                let code = if binding.value_span.is_some() && self.looks_like_function(*id) {
                    DiagnosticCode::FunctionNotReferenced
                } else {
                    DiagnosticCode::VariableDefinedNotReferenced
                };
                emit(
                    self.diagnostics,
                    self.settings.warning_level,
                    code,
                    format!("'{}' is never referenced", binding.name),
                    binding.definition_context,
                );
            }
        }
        // ArgumentNotReferenced: trailing unreferenced parameters only.
        let args: Vec<_> = defined
            .iter()
            .copied()
            .filter(|id| self.arena.binding(*id).category == BindingCategory::Argument)
            .collect();
        for id in args.iter().rev() {
            let binding = self.arena.binding(*id);
            if binding.reference_count > 0 {
                break;
            }
            emit(
                self.diagnostics,
                self.settings.warning_level,
                DiagnosticCode::ArgumentNotReferenced,
                format!("'{}' is never referenced", binding.name),
                binding.definition_context,
            );
        }
        // AmbiguousNamedFunctionExpression: both ends of a link referenced.
        for id in &defined {
            let binding = self.arena.binding(*id);
            if let Some(linked) = binding.linked {
                if binding.reference_count > 0 && self.arena.binding(linked).reference_count > 0 {
                    emit(
                        self.diagnostics,
                        self.settings.warning_level,
                        DiagnosticCode::AmbiguousNamedFunctionExpression,
                        format!("'{}' is ambiguous across engines", binding.name),
                        binding.definition_context,
                    );
                }
            }
        }
    }

    fn looks_like_function(&self, id: super::binding::BindingId) -> bool {
        // Best-effort classification: a binding created with a value_span
        // distinct from its definition_context came from a function
        // declaration (Phase A step 1), since var declarations pass the
        // declarator span as both.
        let binding = self.arena.binding(id);
        binding.value_span.map(|v| v != binding.definition_context).unwrap_or(false)
    }

    // ---- Phase B: reference resolution --------------------------------

    fn visit_statement(&mut self, stmt: &Statement<'ast>) {
        match stmt {
            Statement::ExpressionStatement(s) => self.visit_expression(&s.expression, RefType::Variable),
            Statement::BlockStatement(block) => {
                let outer = self.current();
                let env = self.arena.new_environment(
                    EnvironmentKind::Declarative,
                    Some(outer),
                    false,
                    self.is_strict_here(),
                    true,
                );
                self.env_stack.push(env);
                self.collect_lexical_declarations(&block.body, env);
                self.apply_directive_prologue(&block.body, env);
                for s in block.body.iter() {
                    self.visit_statement(s);
                }
                self.finish_body(env);
                self.env_stack.pop();
            }
            Statement::VariableDeclaration(decl) => {
                for d in decl.declarations.iter() {
                    if let Some(init) = &d.init {
                        self.visit_expression(init, RefType::Variable);
                    }
                    if decl.kind != VariableDeclarationKind::Var {
                        self.bind_lexical(&d.id, decl.kind, d.init.is_some());
                    }
                }
            }
            Statement::FunctionDeclaration(func) => self.visit_function(func, true),
            Statement::ClassDeclaration(class) => self.visit_class(class),
            Statement::IfStatement(s) => {
                self.visit_expression(&s.test, RefType::Variable);
                self.visit_statement(&s.consequent);
                if let Some(alt) = &s.alternate {
                    self.visit_statement(alt);
                }
            }
            Statement::ForStatement(s) => {
                let outer = self.current();
                let has_lexical_init = matches!(
                    &s.init,
                    Some(oxc_ast::ast::ForStatementInit::VariableDeclaration(d))
                        if d.kind != VariableDeclarationKind::Var
                );
                let env = if has_lexical_init {
                    let env = self.arena.new_environment(
                        EnvironmentKind::Declarative,
                        Some(outer),
                        false,
                        self.is_strict_here(),
                        true,
                    );
                    self.env_stack.push(env);
                    env
                } else {
                    outer
                };
                if let Some(init) = &s.init {
                    match init {
                        oxc_ast::ast::ForStatementInit::VariableDeclaration(decl) => {
                            for d in decl.declarations.iter() {
                                if let Some(init_expr) = &d.init {
                                    self.visit_expression(init_expr, RefType::Variable);
                                }
                                if decl.kind != VariableDeclarationKind::Var {
                                    self.bind_lexical(&d.id, decl.kind, d.init.is_some());
                                }
                            }
                        }
                        expr => self.visit_expression(expr.to_expression(), RefType::Variable),
                    }
                }
                if let Some(test) = &s.test {
                    self.visit_expression(test, RefType::Variable);
                }
                if let Some(update) = &s.update {
                    self.visit_expression(update, RefType::Variable);
                }
                self.visit_statement(&s.body);
                if has_lexical_init {
                    self.finish_body(env);
                    self.env_stack.pop();
                }
            }
            Statement::ForInStatement(s) => {
                self.visit_for_each_left(&s.left);
                self.visit_expression(&s.right, RefType::Variable);
                self.visit_statement(&s.body);
            }
            Statement::ForOfStatement(s) => {
                self.visit_for_each_left(&s.left);
                self.visit_expression(&s.right, RefType::Variable);
                self.visit_statement(&s.body);
            }
            Statement::WhileStatement(s) => {
                self.visit_expression(&s.test, RefType::Variable);
                self.visit_statement(&s.body);
            }
            Statement::DoWhileStatement(s) => {
                self.visit_statement(&s.body);
                self.visit_expression(&s.test, RefType::Variable);
            }
            Statement::ReturnStatement(s) => {
                if let Some(arg) = &s.argument {
                    self.visit_expression(arg, RefType::Variable);
                }
            }
            Statement::ThrowStatement(s) => self.visit_expression(&s.argument, RefType::Variable),
            Statement::TryStatement(s) => {
                for st in s.block.body.iter() {
                    self.visit_statement(st);
                }
                if let Some(handler) = &s.handler {
                    self.visit_catch(handler);
                }
                if let Some(finalizer) = &s.finalizer {
                    for st in finalizer.body.iter() {
                        self.visit_statement(st);
                    }
                }
            }
            Statement::SwitchStatement(s) => {
                self.visit_expression(&s.discriminant, RefType::Variable);
                let outer = self.current();
                let env = self.arena.new_environment(
                    EnvironmentKind::Declarative,
                    Some(outer),
                    false,
                    self.is_strict_here(),
                    true,
                );
                self.env_stack.push(env);
                for case in s.cases.iter() {
                    self.collect_lexical_declarations(&case.consequent, env);
                }
                for case in s.cases.iter() {
                    if let Some(test) = &case.test {
                        self.visit_expression(test, RefType::Variable);
                    }
                    for st in case.consequent.iter() {
                        self.visit_statement(st);
                    }
                }
                self.finish_body(env);
                self.env_stack.pop();
            }
            Statement::LabeledStatement(s) => self.visit_statement(&s.body),
            Statement::WithStatement(s) => {
                self.visit_expression(&s.object, RefType::Variable);
                let outer = self.current();
                let env = self.arena.new_environment(
                    EnvironmentKind::Object,
                    Some(outer),
                    false,
                    self.is_strict_here(),
                    false,
                );
                self.env_stack.push(env);
                self.visit_statement(&s.body);
                self.env_stack.pop();
            }
            Statement::BreakStatement(_) | Statement::ContinueStatement(_) | Statement::EmptyStatement(_) | Statement::DebuggerStatement(_) => {}
            _ => {}
        }
    }

    fn visit_for_each_left(&mut self, left: &oxc_ast::ast::ForStatementLeft<'ast>) {
        if let oxc_ast::ast::ForStatementLeft::VariableDeclaration(decl) = left {
            if decl.kind != VariableDeclarationKind::Var {
                for d in decl.declarations.iter() {
                    self.bind_lexical(&d.id, decl.kind, true);
                }
            }
        } else {
            self.visit_expression(left.to_expression(), RefType::Variable);
        }
    }

    fn collect_lexical_declarations(&mut self, body: &ArenaVec<'ast, Statement<'ast>>, env: EnvironmentId) {
        for stmt in body.iter() {
            match stmt {
                Statement::VariableDeclaration(decl) if decl.kind != VariableDeclarationKind::Var => {
                    for d in decl.declarations.iter() {
                        for (name, span) in pattern_names(&d.id) {
                            if decl.kind == VariableDeclarationKind::Const {
                                self.arena.create_immutable_binding(env, &name, BindingCategory::Normal, span);
                            } else {
                                self.arena.create_mutable_binding(env, &name, BindingCategory::Normal, span);
                            }
                        }
                    }
                }
                Statement::FunctionDeclaration(func) => {
                    if let Some(id) = &func.id {
                        self.arena
                            .create_mutable_binding(env, id.name.as_str(), BindingCategory::Normal, id.span);
                    }
                }
                Statement::ClassDeclaration(class) => {
                    if let Some(id) = &class.id {
                        self.arena
                            .create_mutable_binding(env, id.name.as_str(), BindingCategory::Normal, id.span);
                    }
                }
                _ => {}
            }
        }
    }

    fn bind_lexical(&mut self, pattern: &BindingPattern<'ast>, kind: VariableDeclarationKind, initialized: bool) {
        let env = self.current();
        for (name, _span) in pattern_names(pattern) {
            if let Some(id) = self.arena.env(env).try_get_binding(&name) {
                if kind == VariableDeclarationKind::Const || !self.arena.binding(id).is_mutable {
                    self.arena.binding_mut(id).is_initialized = initialized;
                }
            }
        }
    }

    fn visit_catch(&mut self, handler: &CatchClause<'ast>) {
        let outer = self.current();
        let env = self.arena.new_environment(
            EnvironmentKind::Declarative,
            Some(outer),
            false,
            self.is_strict_here(),
            true,
        );
        self.env_stack.push(env);
        if let Some(param) = &handler.param {
            for (name, span) in pattern_names(&param.pattern) {
                let id = self
                    .arena
                    .create_mutable_binding(env, &name, BindingCategory::CatchArgument, span);
                self.arena.binding_mut(id).is_initialized = true;
                if let Some(outer_binding) = self.find_in_ancestor(outer, &name) {
                    self.arena.binding_mut(id).linked = Some(outer_binding);
                } else {
                    let placeholder = self.arena.create_placeholder(outer, span);
                    self.arena.binding_mut(id).linked = Some(placeholder);
                }
            }
        }
        self.collect_lexical_declarations(&handler.body.body, env);
        for st in handler.body.body.iter() {
            self.visit_statement(st);
        }
        self.finish_body(env);
        self.env_stack.pop();
    }

    fn find_in_ancestor(&self, start: EnvironmentId, name: &str) -> Option<super::binding::BindingId> {
        let mut current = Some(start);
        while let Some(id) = current {
            if let Some(b) = self.arena.env(id).try_get_binding(name) {
                return Some(b);
            }
            current = self.arena.env(id).outer;
        }
        None
    }

    fn visit_class(&mut self, class: &Class<'ast>) {
        if let Some(super_class) = &class.super_class {
            self.visit_expression(super_class, RefType::Variable);
        }
        for element in class.body.body.iter() {
            if let oxc_ast::ast::ClassElement::MethodDefinition(m) = element {
                self.visit_function(&m.value, false);
            }
        }
    }

    fn visit_function(&mut self, func: &Function<'ast>, _is_declaration: bool) {
        let Some(body) = &func.body else {
            // Ambient/declare-only signature; nothing to resolve.
            return;
        };
        let outer = self.current();
        let strict_by_settings = matches!(self.settings.strict_mode, StrictMode::On);
        let inherited_strict = self.is_strict_here();
        let env = self.arena.new_environment(
            EnvironmentKind::Declarative,
            Some(outer),
            true,
            inherited_strict || strict_by_settings,
            true,
        );
        self.env_stack.push(env);
        let mut seen_params = ahash::AHashSet::default();
        for (i, param) in func.params.items.iter().enumerate() {
            for (name, span) in pattern_names(&param.pattern) {
                if !seen_params.insert(name.clone()) {
                    emit(
                        self.diagnostics,
                        self.settings.warning_level,
                        DiagnosticCode::StrictModeDuplicateArgument,
                        format!("duplicate parameter '{name}'"),
                        span,
                    );
                }
                let existing_shadowed = self.arena.env(env).has_binding(&name);
                let id = self
                    .arena
                    .create_mutable_binding(env, &name, BindingCategory::Argument, span);
                self.arena.binding_mut(id).is_initialized = true;
                if existing_shadowed && i > 0 {
                    emit(
                        self.diagnostics,
                        self.settings.warning_level,
                        DiagnosticCode::HiddenArgument,
                        format!("parameter '{name}' is shadowed by a later declaration"),
                        span,
                    );
                }
            }
        }
        self.run_body(&body.statements, env, true);
        self.finish_body_exclude_args(env);
        self.env_stack.pop();
    }

    fn finish_body_exclude_args(&mut self, _env: EnvironmentId) {
        // `finish_body` already ran at the end of `run_body`; this exists so
        // callers read symmetrically with `visit_catch`/block handling.
    }

    fn visit_arrow(&mut self, func: &ArrowFunctionExpression<'ast>) {
        let outer = self.current();
        let env = self.arena.new_environment(
            EnvironmentKind::Declarative,
            Some(outer),
            false,
            self.is_strict_here(),
            true,
        );
        self.env_stack.push(env);
        for param in func.params.items.iter() {
            for (name, span) in pattern_names(&param.pattern) {
                let id = self
                    .arena
                    .create_mutable_binding(env, &name, BindingCategory::Argument, span);
                self.arena.binding_mut(id).is_initialized = true;
            }
        }
        if func.expression {
            if let Some(Statement::ExpressionStatement(s)) = func.body.statements.first() {
                self.visit_expression(&s.expression, RefType::Variable);
            }
        } else {
            self.run_body(&func.body.statements, env, false);
        }
        self.finish_body(env);
        self.env_stack.pop();
    }

    fn visit_named_function_expression(&mut self, func: &Function<'ast>) {
        let Some(id) = &func.id else {
            self.visit_function(func, false);
            return;
        };
        let outer = self.current();
        let nfe_env = self.arena.new_environment(
            EnvironmentKind::NamedFunctionExpression,
            Some(outer),
            false,
            self.is_strict_here(),
            true,
        );
        let nfe_binding =
            self.arena
                .create_immutable_binding(nfe_env, id.name.as_str(), BindingCategory::NamedFunctionExpression, id.span);
        self.arena.initialize_immutable_binding(nfe_binding, func.span);
        if let Some(outer_binding) = self.find_in_ancestor(outer, id.name.as_str()) {
            self.arena.binding_mut(nfe_binding).linked = Some(outer_binding);
        }
        self.env_stack.push(nfe_env);
        self.visit_function(func, false);
        self.env_stack.pop();
    }

    fn visit_expression(&mut self, expr: &Expression<'ast>, ref_type: RefType) {
        match expr {
            Expression::Identifier(ident) => self.resolve_identifier(ident.name.as_str(), ident.span, ref_type, false),
            Expression::UnaryExpression(u) => {
                let is_typeof = u.operator == oxc_syntax::operator::UnaryOperator::Typeof;
                if is_typeof {
                    if let Expression::Identifier(ident) = &u.argument {
                        self.resolve_identifier(ident.name.as_str(), ident.span, RefType::Variable, true);
                        return;
                    }
                }
                self.visit_expression(&u.argument, RefType::Variable);
            }
            Expression::UpdateExpression(u) => self.visit_simple_target(&u.argument),
            Expression::AssignmentExpression(a) => {
                self.visit_expression(&a.right, RefType::Variable);
                self.visit_assignment_target(&a.left);
            }
            Expression::BinaryExpression(b) => {
                self.visit_expression(&b.left, RefType::Variable);
                self.visit_expression(&b.right, RefType::Variable);
            }
            Expression::LogicalExpression(b) => {
                self.visit_expression(&b.left, RefType::Variable);
                self.visit_expression(&b.right, RefType::Variable);
            }
            Expression::ConditionalExpression(c) => {
                self.visit_expression(&c.test, RefType::Variable);
                self.visit_expression(&c.consequent, RefType::Variable);
                self.visit_expression(&c.alternate, RefType::Variable);
            }
            Expression::SequenceExpression(s) => {
                for e in s.expressions.iter() {
                    self.visit_expression(e, RefType::Variable);
                }
            }
            Expression::CallExpression(c) => {
                self.visit_expression(&c.callee, RefType::Function);
                for arg in c.arguments.iter() {
                    if let Some(e) = arg.as_expression() {
                        self.visit_expression(e, RefType::Variable);
                    }
                }
            }
            Expression::NewExpression(n) => {
                self.visit_expression(&n.callee, RefType::Constructor);
                for arg in n.arguments.iter() {
                    if let Some(e) = arg.as_expression() {
                        self.visit_expression(e, RefType::Variable);
                    }
                }
            }
            Expression::StaticMemberExpression(m) => self.visit_expression(&m.object, RefType::Variable),
            Expression::ComputedMemberExpression(m) => {
                self.visit_expression(&m.object, RefType::Variable);
                self.visit_expression(&m.expression, RefType::Variable);
            }
            Expression::ArrayExpression(a) => {
                for el in a.elements.iter() {
                    if let Some(e) = el.as_expression() {
                        self.visit_expression(e, RefType::Variable);
                    }
                }
            }
            Expression::ObjectExpression(o) => {
                for prop in o.properties.iter() {
                    if let oxc_ast::ast::ObjectPropertyKind::ObjectProperty(p) = prop {
                        if p.computed {
                            self.visit_expression(&p.key.to_expression(), RefType::Variable);
                        }
                        self.visit_expression(&p.value, RefType::Variable);
                    }
                }
            }
            Expression::FunctionExpression(func) => self.visit_named_function_expression(func),
            Expression::ArrowFunctionExpression(func) => self.visit_arrow(func),
            Expression::ClassExpression(class) => self.visit_class(class),
            Expression::TemplateLiteral(t) => {
                for e in t.expressions.iter() {
                    self.visit_expression(e, RefType::Variable);
                }
            }
            Expression::TaggedTemplateExpression(t) => {
                self.visit_expression(&t.tag, RefType::Variable);
                for e in t.quasi.expressions.iter() {
                    self.visit_expression(e, RefType::Variable);
                }
            }
            Expression::ParenthesizedExpression(p) => self.visit_expression(&p.expression, ref_type),
            Expression::AwaitExpression(a) => self.visit_expression(&a.argument, RefType::Variable),
            Expression::YieldExpression(y) => {
                if let Some(arg) = &y.argument {
                    self.visit_expression(arg, RefType::Variable);
                }
            }
            _ => {}
        }
    }

    fn visit_simple_target(&mut self, expr: &oxc_ast::ast::SimpleAssignmentTarget<'ast>) {
        match expr {
            oxc_ast::ast::SimpleAssignmentTarget::AssignmentTargetIdentifier(ident) => {
                self.resolve_identifier(ident.name.as_str(), ident.span, RefType::Variable, true);
            }
            _ => {
                if let Some(expr) = expr.as_expression() {
                    self.visit_expression(expr, RefType::Variable);
                }
            }
        }
    }

    fn visit_assignment_target(&mut self, target: &oxc_ast::ast::AssignmentTarget<'ast>) {
        match target {
            oxc_ast::ast::AssignmentTarget::AssignmentTargetIdentifier(ident) => {
                self.resolve_identifier(ident.name.as_str(), ident.span, RefType::Variable, true);
            }
            _ => {
                if let Some(expr) = target.as_expression() {
                    self.visit_expression(expr, RefType::Variable);
                }
            }
        }
    }

    fn resolve_identifier(&mut self, name: &str, span: Span, ref_type: RefType, is_assignment_or_typeof: bool) {
        let env = self.current();
        let reference = self.arena.get_identifier_reference(env, name, span, ref_type);
        let reference = if reference.base.is_none() {
            let is_known_global = self.known_globals.iter().any(|g| g.as_str() == name);
            let is_typeof = matches!(ref_type, RefType::Variable) && is_assignment_or_typeof && !is_known_global;
            let global = self.arena.global;
            let binding_id = self.arena.materialize_global(
                name,
                span,
                is_known_global,
                is_typeof,
                is_assignment_or_typeof,
                matches!(ref_type, RefType::Function),
                self.diagnostics,
                self.settings.warning_level,
            );
            super::binding::Reference {
                name: name.to_string(),
                base: Some(global),
                binding: Some(binding_id),
                context: span,
                ref_type,
            }
        } else {
            reference
        };
        self.arena.resolve_lookup(span, reference);
    }
}

/// Flattens a binding pattern into `(name, span)` pairs (§4.1's "bind every
/// declared name"), recursing through array/object destructuring and
/// default-value wrappers.
fn pattern_names<'ast>(pattern: &BindingPattern<'ast>) -> Vec<(String, Span)> {
    let mut out = Vec::new();
    collect_pattern_names(&pattern.kind, &mut out);
    out
}

fn collect_pattern_names<'ast>(kind: &BindingPatternKind<'ast>, out: &mut Vec<(String, Span)>) {
    match kind {
        BindingPatternKind::BindingIdentifier(id) => out.push((id.name.as_str().to_string(), id.span)),
        BindingPatternKind::ObjectPattern(obj) => {
            for prop in obj.properties.iter() {
                collect_pattern_names(&prop.value.kind, out);
            }
            if let Some(rest) = &obj.rest {
                collect_pattern_names(&rest.argument.kind, out);
            }
        }
        BindingPatternKind::ArrayPattern(arr) => {
            for el in arr.elements.iter().flatten() {
                collect_pattern_names(&el.kind, out);
            }
            if let Some(rest) = &arr.rest {
                collect_pattern_names(&rest.argument.kind, out);
            }
        }
        BindingPatternKind::AssignmentPattern(assign) => collect_pattern_names(&assign.left.kind, out),
    }
}

