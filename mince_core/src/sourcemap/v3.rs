// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The V3 source map sink (§4.6): VLQ/base64 mappings grouped by output
//! line, serialized as `{version:3, file, sourceRoot, sources, names,
//! mappings}`.

use super::{Segment, SourceMapSink};
use super::vlq;

#[derive(Default)]
struct Mapping {
    generated_column: u32,
    source_index: i64,
    original_line: i64,
    original_column: i64,
    name_index: i64,
}

/// Streaming V3 sink. Mappings are buffered per output line so that each
/// line's VLQ fields can be delta-encoded against the previous segment on
/// that line, per the source map v3 spec.
#[derive(Default)]
pub struct V3SourceMapSink {
    source_root: Option<String>,
    sources: Vec<String>,
    names: Vec<String>,
    lines: Vec<Vec<Mapping>>,
    current_source: Option<usize>,
}

impl V3SourceMapSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn name_index(&mut self, name: &str) -> i64 {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            pos as i64
        } else {
            self.names.push(name.to_string());
            (self.names.len() - 1) as i64
        }
    }

    /// Renders the accumulated mappings as a complete source map JSON
    /// document, matching the [end_package][SourceMapSink::end_package]
    /// contract.
    pub fn to_json(&self, file: Option<&str>) -> String {
        let mut mappings = String::new();
        let mut prev_col = 0i64;
        let mut prev_source = 0i64;
        let mut prev_line = 0i64;
        let mut prev_orig_col = 0i64;
        let mut prev_name = 0i64;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                mappings.push(';');
            }
            prev_col = 0;
            for (j, seg) in line.iter().enumerate() {
                if j > 0 {
                    mappings.push(',');
                }
                vlq::encode(seg.generated_column as i64 - prev_col, &mut mappings);
                prev_col = seg.generated_column as i64;
                vlq::encode(seg.source_index - prev_source, &mut mappings);
                prev_source = seg.source_index;
                vlq::encode(seg.original_line - prev_line, &mut mappings);
                prev_line = seg.original_line;
                vlq::encode(seg.original_column - prev_orig_col, &mut mappings);
                prev_orig_col = seg.original_column;
                if seg.name_index >= 0 {
                    vlq::encode(seg.name_index - prev_name, &mut mappings);
                    prev_name = seg.name_index;
                }
            }
        }

        let sources_json = self
            .sources
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(",");
        let names_json = self
            .names
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(",");
        let source_root = self
            .source_root
            .as_deref()
            .map(|r| format!(r#","sourceRoot":{r:?}"#))
            .unwrap_or_default();
        let file_field = file.map(|f| format!(r#","file":{f:?}"#)).unwrap_or_default();

        format!(
            r#"{{"version":3{file_field}{source_root},"sources":[{sources_json}],"names":[{names_json}],"mappings":"{mappings}"}}"#
        )
    }
}

impl SourceMapSink for V3SourceMapSink {
    fn start_package(&mut self, source_root: Option<&str>) {
        self.source_root = source_root.map(str::to_string);
    }

    fn end_package(&mut self) -> String {
        self.to_json(None)
    }

    fn start_file(&mut self, source_name: &str, _source_content: Option<&str>) {
        self.current_source = Some(self.sources.len());
        self.sources.push(source_name.to_string());
    }

    fn end_file(&mut self) {
        self.current_source = None;
    }

    fn segment(&mut self, segment: Segment) {
        let line_idx = segment.generated_line as usize;
        while self.lines.len() <= line_idx {
            self.lines.push(Vec::new());
        }
        let name_index = segment.name.map(|n| self.name_index(n)).unwrap_or(-1);
        self.lines[line_idx].push(Mapping {
            generated_column: segment.generated_column,
            source_index: segment.source_index as i64,
            original_line: segment.original_line as i64,
            original_column: segment.original_column as i64,
            name_index,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_map_serializes_with_empty_arrays() {
        let sink = V3SourceMapSink::new();
        let json = sink.to_json(Some("out.min.js"));
        assert!(json.contains(r#""version":3"#));
        assert!(json.contains(r#""sources":[]"#));
        assert!(json.contains(r#""mappings":"""#));
    }

    #[test]
    fn one_segment_per_line_produces_one_mapping_group() {
        let mut sink = V3SourceMapSink::new();
        sink.start_file("in.js", None);
        sink.segment(Segment {
            generated_line: 0,
            generated_column: 0,
            source_index: 0,
            original_line: 0,
            original_column: 0,
            name: None,
        });
        sink.segment(Segment {
            generated_line: 1,
            generated_column: 4,
            source_index: 0,
            original_line: 2,
            original_column: 1,
            name: Some("foo"),
        });
        let json = sink.to_json(None);
        assert!(json.contains(r#""names":["foo"]"#));
        assert_eq!(json.matches(';').count(), 1);
    }
}
