// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### Environments — nodes in the scope chain (§3, §4.1)
//!
//! An Environment Record is the association of identifiers to bindings,
//! based on the lexical nesting structure of the source. Every environment
//! has an outer-environment link; the logical nesting of environments
//! mirrors the nesting of the syntactic constructs that introduce them.

use ahash::AHashMap;
use oxc_span::Span;

use super::binding::BindingId;

/// Index of an [`Environment`] inside a [`crate::scope::arena::ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvironmentId(pub(crate) u32);

impl EnvironmentId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The three concrete environment-record kinds, plus the named-function-
/// expression environment that (per spec) behaves like a Declarative
/// environment holding exactly one immutable binding (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKind {
    /// Global scope, or a `with` statement's object environment. Binds a
    /// dynamic property set rather than a fixed name list.
    Object,
    /// A function body, a block, or a catch clause.
    Declarative,
    /// Wraps a function environment; binds exactly the function's own name.
    NamedFunctionExpression,
}

/// A node in the scope chain (§3, §4.1).
#[derive(Debug, Clone)]
pub struct Environment {
    pub kind: EnvironmentKind,
    pub outer: Option<EnvironmentId>,
    /// Local name → binding. `ahash`-hashed: identifier lookups are the hot
    /// path of the whole resolver, and this is the same hasher this stack's
    /// own declarative-environment records use for exactly that reason.
    pub bindings: AHashMap<String, BindingId>,
    /// Bindings defined directly in this environment, in declaration order
    /// (the renamer iterates this, not the hash map, so output is
    /// deterministic and so `definition_context` tie-breaking is stable).
    pub defined: Vec<BindingId>,
    pub is_function_scope: bool,
    pub use_strict: bool,
    /// False if an enclosing `with` or direct `eval` makes name resolution
    /// undecidable at compile time (§3).
    pub is_known_at_compile_time: bool,
    /// References that traversed this environment without resolving inside
    /// it, because the environment's binding object might, at runtime,
    /// satisfy them (a pass-through reference, §4.1's shadowing rule). The
    /// renamer must avoid these names in this environment.
    pub pass_through: Vec<(String, Span)>,
    /// True for the global environment and any object environment (`with`)
    /// — matches `EnvironmentKind::Object`; kept as its own field because
    /// it's checked on every `create_mutable_binding` call and a field read
    /// is cheaper than re-deriving it from `kind` there.
    pub must_rename_bindings_forced: bool,
}

impl Environment {
    pub fn new(
        kind: EnvironmentKind,
        outer: Option<EnvironmentId>,
        is_function_scope: bool,
        use_strict: bool,
        is_known_at_compile_time: bool,
    ) -> Self {
        Self {
            kind,
            outer,
            bindings: AHashMap::default(),
            defined: Vec::new(),
            is_function_scope,
            use_strict,
            is_known_at_compile_time,
            pass_through: Vec::new(),
            must_rename_bindings_forced: false,
        }
    }

    pub fn try_get_binding(&self, name: &str) -> Option<BindingId> {
        self.bindings.get(name).copied()
    }

    pub fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn record_pass_through(&mut self, name: &str, context: Span) {
        if !self.pass_through.iter().any(|(n, _)| n == name) {
            self.pass_through.push((name.to_string(), context));
        }
    }
}
