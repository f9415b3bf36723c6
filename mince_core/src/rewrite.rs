// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The final-pass rewriter (§4.3): small, targeted rewrites that depend on
//! resolved bindings, run once after the scope resolver and before the
//! renamer. Because the AST is an immutable external borrow, rewrites are
//! recorded as side tables the serializer consults rather than as in-place
//! node mutation.

use ahash::AHashSet;
use oxc_span::Span;

use crate::scope::arena::ScopeArena;
use crate::scope::binding::BindingId;
use crate::settings::Settings;

/// Rewrites computed once, after resolution, consulted by the serializer.
#[derive(Debug, Default)]
pub(crate) struct RewritePlan {
    /// Spans of boolean literal expressions to print as `!0`/`!1`.
    pub rewrite_as_bang_number: AHashSet<Span>,
    /// Variable-declarator spans to skip entirely because their binding is
    /// generated and unreferenced.
    pub deleted_decl_spans: AHashSet<Span>,
}

/// Runs the two duties of §4.3 and returns the plan the serializer reads.
/// Takes the arena mutably because the second duty — deleting a generated,
/// unreferenced binding — also removes it from its environment so the
/// renamer never spends a name slot on it.
pub(crate) fn plan(arena: &mut ScopeArena, settings: &Settings, boolean_spans: &[(Span, bool)]) -> RewritePlan {
    let mut plan = RewritePlan::default();
    if settings.rewrite_booleans {
        for (span, _value) in boolean_spans {
            plan.rewrite_as_bang_number.insert(*span);
        }
    }
    let doomed: Vec<BindingId> = arena
        .bindings()
        .filter(|(_, binding)| binding.is_generated && binding.reference_count == 0)
        .map(|(id, _)| id)
        .collect();
    for id in doomed {
        plan.deleted_decl_spans.insert(arena.binding(id).definition_context);
        arena.remove_binding(id);
    }
    plan
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scope::binding::BindingCategory;
    use crate::scope::environment::EnvironmentKind;

    #[test]
    fn unreferenced_generated_binding_is_marked_for_deletion_and_unbound() {
        let mut arena = ScopeArena::new();
        let env = arena.new_environment(EnvironmentKind::Declarative, Some(arena.global), true, false, true);
        let id = arena.create_mutable_binding(env, "arguments", BindingCategory::Arguments, Span::new(0, 0));
        arena.binding_mut(id).is_generated = true;

        let settings = Settings::default();
        let plan = plan(&mut arena, &settings, &[]);
        assert!(plan.deleted_decl_spans.contains(&Span::new(0, 0)));
        assert!(!arena.env(env).defined.contains(&id));
        assert!(!arena.env(env).has_binding("arguments"));
    }

    #[test]
    fn referenced_generated_binding_is_kept() {
        let mut arena = ScopeArena::new();
        let env = arena.new_environment(EnvironmentKind::Declarative, Some(arena.global), true, false, true);
        let id = arena.create_mutable_binding(env, "arguments", BindingCategory::Arguments, Span::new(0, 0));
        arena.binding_mut(id).is_generated = true;
        arena.binding_mut(id).reference_count = 1;

        let settings = Settings::default();
        let plan = plan(&mut arena, &settings, &[]);
        assert!(!plan.deleted_decl_spans.contains(&Span::new(0, 0)));
        assert!(arena.env(env).defined.contains(&id));
    }
}
