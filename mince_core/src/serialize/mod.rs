// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The output serializer (§4.5).

mod numeric;
mod precedence;
mod strings;
mod writer;

use oxc_ast::ast::Program;

use crate::rewrite::RewritePlan;
use crate::scope::arena::ScopeArena;
use crate::settings::Settings;
use crate::sourcemap::SourceMapSink;

#[allow(clippy::too_many_arguments)]
pub(crate) fn serialize<'a, 'b>(
    program: &Program,
    source: &'a str,
    source_name: &str,
    arena: &'a ScopeArena,
    plan: &'a RewritePlan,
    settings: &'a Settings,
    out: &'a mut dyn std::fmt::Write,
    source_map: Option<&'b mut dyn SourceMapSink>,
) {
    let mut serializer = writer::Serializer::new(out, source, arena, plan, settings, source_map);
    serializer.run(program, source_name);
}

