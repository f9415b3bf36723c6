// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The legacy XML source map sink (§4.6): an XML document of symbol
//! entries, kept for parity with the alternate output format this
//! ecosystem's predecessor minifiers shipped alongside the V3 format.

use super::{Segment, SourceMapSink};

struct Entry {
    generated_line: u32,
    generated_column: u32,
    source_file: String,
    original_line: u32,
    original_column: u32,
    name: Option<String>,
}

#[derive(Default)]
pub struct LegacyXmlSourceMapSink {
    current_source: Option<String>,
    entries: Vec<Entry>,
}

impl LegacyXmlSourceMapSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<symbolMap>\n");
        for entry in &self.entries {
            out.push_str("  <symbol");
            push_attr(&mut out, "generatedLine", &entry.generated_line.to_string());
            push_attr(&mut out, "generatedColumn", &entry.generated_column.to_string());
            push_attr(&mut out, "sourceFile", &entry.source_file);
            push_attr(&mut out, "originalLine", &entry.original_line.to_string());
            push_attr(&mut out, "originalColumn", &entry.original_column.to_string());
            if let Some(name) = &entry.name {
                push_attr(&mut out, "name", name);
            }
            out.push_str("/>\n");
        }
        out.push_str("</symbolMap>\n");
        out
    }
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out.push('"');
}

impl SourceMapSink for LegacyXmlSourceMapSink {
    fn start_package(&mut self, _source_root: Option<&str>) {}

    fn end_package(&mut self) -> String {
        self.to_xml()
    }

    fn start_file(&mut self, source_name: &str, _source_content: Option<&str>) {
        self.current_source = Some(source_name.to_string());
    }

    fn end_file(&mut self) {
        self.current_source = None;
    }

    fn segment(&mut self, segment: Segment) {
        let source_file = self.current_source.clone().unwrap_or_default();
        self.entries.push(Entry {
            generated_line: segment.generated_line,
            generated_column: segment.generated_column,
            source_file,
            original_line: segment.original_line,
            original_column: segment.original_column,
            name: segment.name.map(str::to_string),
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn escapes_attribute_values() {
        let mut sink = LegacyXmlSourceMapSink::new();
        sink.start_file("a&b.js", None);
        sink.segment(Segment {
            generated_line: 0,
            generated_column: 0,
            source_index: 0,
            original_line: 0,
            original_column: 0,
            name: None,
        });
        let xml = sink.to_xml();
        assert!(xml.contains("a&amp;b.js"));
    }
}
