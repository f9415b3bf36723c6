// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The scope arena: owns every [`Environment`] and [`Binding`] produced
//! while resolving one program, plus the reference table that stands in
//! for per-node `Reference` annotations (§2's "scope arena + reference
//! table" design note).

use ahash::AHashMap;
use oxc_span::Span;

use super::binding::{Binding, BindingCategory, BindingId, Reference, RefType};
use super::environment::{Environment, EnvironmentId, EnvironmentKind};
use crate::diagnostics::{DiagnosticCode, DiagnosticSink, emit};

pub struct ScopeArena {
    environments: Vec<Environment>,
    bindings: Vec<Binding>,
    /// Keyed by the `Span` of the identifier occurrence that produced the
    /// reference — spans are unique per syntactic occurrence in the source,
    /// which is all the stability a side table needs (§3).
    references: AHashMap<Span, Reference>,
    pub global: EnvironmentId,
}

impl ScopeArena {
    pub fn new() -> Self {
        let mut environments = Vec::new();
        environments.push(Environment::new(
            EnvironmentKind::Object,
            None,
            false,
            false,
            true,
        ));
        Self {
            environments,
            bindings: Vec::new(),
            references: AHashMap::default(),
            global: EnvironmentId(0),
        }
    }

    pub fn env(&self, id: EnvironmentId) -> &Environment {
        &self.environments[id.index()]
    }

    pub fn env_mut(&mut self, id: EnvironmentId) -> &mut Environment {
        &mut self.environments[id.index()]
    }

    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id.index()]
    }

    pub fn binding_mut(&mut self, id: BindingId) -> &mut Binding {
        &mut self.bindings[id.index()]
    }

    pub fn environment_ids(&self) -> impl Iterator<Item = EnvironmentId> {
        (0..self.environments.len() as u32).map(EnvironmentId)
    }

    /// `NewDeclarativeEnvironment` / `NewObjectEnvironment` (§4.1).
    pub fn new_environment(
        &mut self,
        kind: EnvironmentKind,
        outer: Option<EnvironmentId>,
        is_function_scope: bool,
        use_strict: bool,
        is_known_at_compile_time: bool,
    ) -> EnvironmentId {
        let id = EnvironmentId(self.environments.len() as u32);
        self.environments.push(Environment::new(
            kind,
            outer,
            is_function_scope,
            use_strict,
            is_known_at_compile_time,
        ));
        id
    }

    fn push_binding(&mut self, env: EnvironmentId, binding: Binding) -> BindingId {
        let id = BindingId(self.bindings.len() as u32);
        self.bindings.push(binding);
        let name = self.bindings[id.index()].name.clone();
        let e = self.env_mut(env);
        e.bindings.insert(name, id);
        e.defined.push(id);
        id
    }

    /// `CreateMutableBinding(N, D)` (§4.1). Returns the existing binding
    /// (without diagnosing) when `name` is already bound locally, letting
    /// callers apply the collision table in §4.2 themselves.
    pub fn create_mutable_binding(
        &mut self,
        env: EnvironmentId,
        name: &str,
        category: BindingCategory,
        context: Span,
    ) -> BindingId {
        if let Some(existing) = self.env(env).try_get_binding(name) {
            return existing;
        }
        let binding = Binding::new(name.to_string(), category, env, context);
        self.push_binding(env, binding)
    }

    /// `CreateImmutableBinding(N)` (§4.1). Unlike `create_mutable_binding`
    /// this always creates a fresh binding; callers are responsible for
    /// checking `has_binding` first per the strict-mode duplicate rules.
    pub fn create_immutable_binding(
        &mut self,
        env: EnvironmentId,
        name: &str,
        category: BindingCategory,
        context: Span,
    ) -> BindingId {
        let mut binding = Binding::new(name.to_string(), category, env, context);
        binding.is_mutable = false;
        self.push_binding(env, binding)
    }

    pub fn initialize_immutable_binding(&mut self, id: BindingId, value_span: Span) {
        let binding = self.binding_mut(id);
        debug_assert!(!binding.is_mutable);
        binding.is_initialized = true;
        binding.value_span = Some(value_span);
    }

    /// `CreatePlaceholder` (§4.1): a name guaranteed distinct from all
    /// current and future declared names in `env`, used to reserve a slot
    /// for a linked catch binding.
    pub fn create_placeholder(&mut self, env: EnvironmentId, context: Span) -> BindingId {
        let mut n: u64 = 0;
        let name = loop {
            let candidate = format!("%placeholder{n}%");
            if !self.env(env).has_binding(&candidate) {
                break candidate;
            }
            n += 1;
        };
        let mut binding = Binding::new(name, BindingCategory::Placeholder, env, context);
        binding.is_generated = true;
        binding.can_rename = true;
        self.push_binding(env, binding)
    }

    /// `GetIdentifierReference(name, ctx)` (§4.1): walks outward from `env`.
    /// Returns a reference with `base = None` if nothing binds `name`.
    /// Crossing an environment with `is_known_at_compile_time == false`
    /// that does not itself bind `name` records a pass-through there.
    pub fn get_identifier_reference(
        &mut self,
        env: EnvironmentId,
        name: &str,
        context: Span,
        ref_type: RefType,
    ) -> Reference {
        let mut current = Some(env);
        while let Some(id) = current {
            if let Some(binding) = self.env(id).try_get_binding(name) {
                return Reference {
                    name: name.to_string(),
                    base: Some(id),
                    binding: Some(binding),
                    context,
                    ref_type,
                };
            }
            if !self.env(id).is_known_at_compile_time {
                self.env_mut(id).record_pass_through(name, context);
            }
            current = self.env(id).outer;
        }
        Reference {
            name: name.to_string(),
            base: None,
            binding: None,
            context,
            ref_type,
        }
    }

    /// `ResolveLookup` (§4.1): records `reference` under `span` and bumps
    /// the resolved binding's `reference_count`.
    pub fn resolve_lookup(&mut self, span: Span, reference: Reference) {
        if let Some(binding) = reference.binding {
            self.binding_mut(binding).reference_count += 1;
        }
        self.references.insert(span, reference);
    }

    pub fn reference_at(&self, span: Span) -> Option<&Reference> {
        self.references.get(&span)
    }

    pub fn references(&self) -> impl Iterator<Item = (&Span, &Reference)> {
        self.references.iter()
    }

    /// Materializes an unresolved name as a binding on the global
    /// environment (§4.2, Phase B), diagnosing it unless it is read via
    /// `typeof`, assigned to directly, or named in `known_globals`.
    pub fn materialize_global(
        &mut self,
        name: &str,
        context: Span,
        is_known_global: bool,
        is_typeof_operand: bool,
        is_assignment_target: bool,
        is_function_call: bool,
        diagnostics: &mut dyn DiagnosticSink,
        warning_level: u8,
    ) -> BindingId {
        let global = self.global;
        if let Some(existing) = self.env(global).try_get_binding(name) {
            return existing;
        }
        let category = if is_known_global {
            BindingCategory::Predefined
        } else if is_typeof_operand || is_assignment_target {
            BindingCategory::Normal
        } else {
            BindingCategory::Undefined
        };
        let id = self.create_mutable_binding(global, name, category, context);
        if matches!(category, BindingCategory::Undefined) {
            let code = if is_function_call {
                DiagnosticCode::UndeclaredFunction
            } else {
                DiagnosticCode::UndeclaredVariable
            };
            emit(
                diagnostics,
                warning_level,
                code,
                format!("'{name}' is not declared"),
                context,
            );
        }
        id
    }

    pub fn bindings(&self) -> impl Iterator<Item = (BindingId, &Binding)> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(i, b)| (BindingId(i as u32), b))
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn bindings_mut_iter(&mut self) -> impl Iterator<Item = (BindingId, &mut Binding)> {
        self.bindings
            .iter_mut()
            .enumerate()
            .map(|(i, b)| (BindingId(i as u32), b))
    }

    /// Drops `id` from its owning environment's `bindings`/`defined` tables
    /// (§4.3 step 2), freeing its name slot for the renamer. The `Binding`
    /// itself stays in the arena so every other `BindingId` stays valid.
    pub fn remove_binding(&mut self, id: BindingId) {
        let owner = self.binding(id).owner;
        let name = self.binding(id).name.clone();
        let env = self.env_mut(owner);
        env.defined.retain(|&b| b != id);
        if env.bindings.get(&name) == Some(&id) {
            env.bindings.remove(&name);
        }
    }
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}
