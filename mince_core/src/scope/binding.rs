// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The [`Binding`] type: a named entry in an [`Environment`](super::environment::Environment).

use oxc_span::Span;

use super::environment::EnvironmentId;

/// Index of a [`Binding`] inside a [`crate::scope::arena::ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub(crate) u32);

impl BindingId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// What role a binding plays, driving the collision rules in §4.2 and the
/// candidate-selection rules in §4.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingCategory {
    /// An ordinary function/var/let/const declaration.
    Normal,
    /// A formal parameter.
    Argument,
    /// The implicit `arguments` object of a non-arrow function.
    Arguments,
    /// A `catch (e)` parameter.
    CatchArgument,
    /// The name binding created by a named function expression, visible only
    /// inside the function's own body under standards-conforming engines.
    NamedFunctionExpression,
    /// A lookup that resolved to nothing and was materialized on the global
    /// environment without being read via `typeof`, assigned, or named in
    /// `known_globals` — diagnosed as undeclared.
    Undefined,
    /// A name the host declared as pre-existing via `known_globals`.
    Predefined,
    /// An invented binding reserving a name slot for a later linked binding
    /// (the "phantom placeholder" of §4.2's catch-block rule).
    Placeholder,
}

/// A named entry in exactly one [`Environment`](super::environment::Environment) (§3).
#[derive(Debug, Clone)]
pub struct Binding {
    /// Original spelling, as written in the source.
    pub name: String,
    /// Name assigned by the renamer; `None` until §4.4 runs.
    pub alternate_name: Option<String>,
    pub can_rename: bool,
    pub category: BindingCategory,
    pub is_mutable: bool,
    pub is_initialized: bool,
    /// Span of the AST node whose evaluation initializes this binding, used
    /// for initialization analysis. Stands in for the distilled spec's
    /// `value` field now that the AST is an immutable external borrow.
    pub value_span: Option<Span>,
    /// Non-`None` iff this binding would read differently under the
    /// pre-ES5 IE named-function-expression rule versus every other engine.
    pub ambiguous_value_span: Option<Span>,
    pub reference_count: u32,
    /// First source position that established the binding.
    pub definition_context: Span,
    /// When present, this binding must carry the same alternate name as the
    /// binding that this relation ultimately points to (NFE↔outer pairing,
    /// catch↔phantom pairing). Modeled as an explicit relation rather than
    /// pointer identity because the two ends may live in different
    /// environments (§9, "Linked bindings").
    pub linked: Option<BindingId>,
    /// True for bindings invented by the core itself (the `arguments`
    /// object, a phantom placeholder) rather than declared in source. Only
    /// bindings with this flag set may be deleted by the final-pass
    /// rewriter.
    pub is_generated: bool,
    /// The environment this binding lives in. Kept on the binding (in
    /// addition to the environment's own binding list) so the renamer can
    /// walk candidates without a second arena lookup.
    pub owner: EnvironmentId,
}

impl Binding {
    pub fn new(
        name: String,
        category: BindingCategory,
        owner: EnvironmentId,
        definition_context: Span,
    ) -> Self {
        Self {
            name,
            alternate_name: None,
            can_rename: true,
            category,
            is_mutable: true,
            is_initialized: false,
            value_span: None,
            ambiguous_value_span: None,
            reference_count: 0,
            definition_context,
            linked: None,
            is_generated: false,
            owner,
        }
    }

    /// The name the serializer should emit: the alternate name if renaming
    /// has assigned one, otherwise the original spelling.
    pub fn effective_name(&self) -> &str {
        self.alternate_name.as_deref().unwrap_or(&self.name)
    }
}

/// A resolved or unresolved name use (§3, "Reference").
#[derive(Debug, Clone)]
pub struct Reference {
    pub name: String,
    /// `None` marks an unresolved reference; resolution always replaces
    /// this with `Some` before `minify` returns (§3, invariant 1), by
    /// materializing a global binding if nothing else matched.
    pub base: Option<EnvironmentId>,
    pub binding: Option<BindingId>,
    pub context: Span,
    pub ref_type: RefType,
}

/// How a `Lookup` is used syntactically, determined by its parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    /// Operand of `new`.
    Constructor,
    /// Callee of a call expression.
    Function,
    /// Everything else.
    Variable,
}
