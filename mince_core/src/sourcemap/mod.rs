// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Source map emission (§4.6): a `SourceMapSink` trait the core drives
//! during serialization, with two concrete implementations.

mod legacy_xml;
mod line_index;
mod v3;
mod vlq;

pub use legacy_xml::LegacyXmlSourceMapSink;
pub(crate) use line_index::LineIndex;
pub use v3::V3SourceMapSink;

/// One mapped position: an output line/column paired with the original
/// file/line/column it came from, and an optional original symbol name.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub generated_line: u32,
    pub generated_column: u32,
    pub source_index: u32,
    pub original_line: u32,
    pub original_column: u32,
    pub name: Option<&'a str>,
}

/// Driven by the output serializer as it emits tokens; neither the
/// resolver nor the serializer depends on which concrete sink is
/// installed (§4.6).
pub trait SourceMapSink {
    fn start_package(&mut self, source_root: Option<&str>);
    fn end_package(&mut self) -> String;
    fn start_file(&mut self, source_name: &str, source_content: Option<&str>);
    fn end_file(&mut self);
    fn segment(&mut self, segment: Segment);
}
