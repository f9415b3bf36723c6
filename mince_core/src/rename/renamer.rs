// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The name minifier (§4.4): assigns alternate names to bindings, scope by
//! scope, outer-to-inner, under an avoidance-set constraint.

use ahash::AHashSet;

use super::generator::NameGenerator;
use crate::scope::arena::ScopeArena;
use crate::scope::binding::BindingId;
use crate::scope::environment::EnvironmentId;
use crate::settings::{LocalRenaming, Settings};

/// Runs §4.4 over every environment in `arena`, outer-to-inner by
/// environment id (environments are always created after their parent, so
/// ascending id order is a valid topological order).
pub(crate) fn rename_all(arena: &mut ScopeArena, settings: &Settings) {
    if matches!(settings.local_renaming, LocalRenaming::None) {
        return;
    }
    apply_rename_pairs(arena, settings);
    let mut env_ids: Vec<EnvironmentId> = arena.environment_ids().collect();
    env_ids.sort_by_key(|e| e.index());
    for env in env_ids {
        rename_scope(arena, settings, env);
    }
}

fn apply_rename_pairs(arena: &mut ScopeArena, settings: &Settings) {
    for pair in &settings.rename_pairs {
        for (_, binding) in arena.bindings_mut_iter() {
            if binding.name == pair.from.as_str() {
                binding.alternate_name = Some(pair.to.as_str().to_string());
                binding.can_rename = false;
            }
        }
    }
    for name in &settings.no_auto_rename {
        for (_, binding) in arena.bindings_mut_iter() {
            if binding.name == name.as_str() {
                binding.can_rename = false;
            }
        }
    }
    if settings.preserve_function_names {
        for (_, binding) in arena.bindings_mut_iter() {
            if matches!(
                binding.category,
                crate::scope::binding::BindingCategory::NamedFunctionExpression
            ) {
                binding.can_rename = false;
            }
        }
    }
}

fn is_localization_name(name: &str) -> bool {
    name.starts_with("Loc") || name.starts_with("loc")
}

fn rename_scope(arena: &mut ScopeArena, settings: &Settings, env: EnvironmentId) {
    let is_known_at_compile_time = arena.env(env).is_known_at_compile_time;
    if !is_known_at_compile_time && !settings.must_rename_bindings {
        return;
    }
    let strict = arena.env(env).use_strict;
    let defined = arena.env(env).defined.clone();

    let mut candidates: Vec<BindingId> = Vec::new();
    let mut linked: Vec<BindingId> = Vec::new();
    let mut avoid: AHashSet<String> = AHashSet::default();

    for id in &defined {
        let binding = arena.binding(*id);
        if binding.linked.is_some() {
            linked.push(*id);
            continue;
        }
        let eligible = binding.can_rename
            && match settings.local_renaming {
                LocalRenaming::None => false,
                LocalRenaming::Hypercrunch => true,
                LocalRenaming::KeepLocalizationVars => !is_localization_name(&binding.name),
            };
        if eligible {
            candidates.push(*id);
        } else {
            avoid.insert(binding.effective_name().to_string());
        }
    }
    for (name, _) in &arena.env(env).pass_through {
        avoid.insert(name.clone());
    }

    candidates.sort_by(|a, b| {
        let ba = arena.binding(*a);
        let bb = arena.binding(*b);
        bb.reference_count
            .cmp(&ba.reference_count)
            .then_with(|| ba.definition_context.start.cmp(&bb.definition_context.start))
    });

    let mut generator = NameGenerator::new();
    for id in candidates {
        let name = generator.next_avoiding(&avoid, strict);
        avoid.insert(name.clone());
        arena.binding_mut(id).alternate_name = Some(name);
    }

    for id in linked {
        let target = arena.binding(id).linked.expect("filtered above");
        let name = arena.binding(target).alternate_name.clone();
        if let Some(name) = name {
            arena.binding_mut(id).alternate_name = Some(name);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scope::binding::BindingCategory;
    use crate::scope::environment::EnvironmentKind;
    use oxc_span::Span;

    #[test]
    fn renames_most_referenced_binding_first() {
        let mut arena = ScopeArena::new();
        let env = arena.new_environment(EnvironmentKind::Declarative, Some(arena.global), true, false, true);
        let hot = arena.create_mutable_binding(env, "accumulator", BindingCategory::Normal, Span::new(0, 1));
        let cold = arena.create_mutable_binding(env, "helper", BindingCategory::Normal, Span::new(2, 3));
        arena.binding_mut(hot).reference_count = 10;
        arena.binding_mut(cold).reference_count = 1;

        let settings = Settings::default();
        rename_all(&mut arena, &settings);

        assert_eq!(arena.binding(hot).alternate_name.as_deref(), Some("a"));
        assert_eq!(arena.binding(cold).alternate_name.as_deref(), Some("b"));
    }

    #[test]
    fn none_mode_renames_nothing() {
        let mut arena = ScopeArena::new();
        let env = arena.new_environment(EnvironmentKind::Declarative, Some(arena.global), true, false, true);
        let id = arena.create_mutable_binding(env, "value", BindingCategory::Normal, Span::new(0, 1));

        let mut settings = Settings::default();
        settings.local_renaming = LocalRenaming::None;
        rename_all(&mut arena, &settings);

        assert!(arena.binding(id).alternate_name.is_none());
    }
}
