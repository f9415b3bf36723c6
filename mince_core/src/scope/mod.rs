// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The side-table scope model: [`Environment`]s and [`Binding`]s live in a
//! [`ScopeArena`], keyed by small integer handles rather than borrowed from
//! the AST itself (§2, §3).

pub(crate) mod arena;
pub(crate) mod binding;
pub(crate) mod environment;
pub(crate) mod resolver;
