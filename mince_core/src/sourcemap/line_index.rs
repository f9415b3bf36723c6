// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Maps a byte offset in a source text to a 0-based (line, column) pair,
//! the conversion `Segment`'s `original_line`/`original_column` fields need
//! since `oxc_span::Span` only carries byte offsets.

pub(crate) struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    pub(crate) fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let col = offset - self.line_starts[line];
        (line as u32, col)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_line_starts_at_zero() {
        let idx = LineIndex::new("abc\ndef");
        assert_eq!(idx.line_col(0), (0, 0));
        assert_eq!(idx.line_col(4), (1, 0));
        assert_eq!(idx.line_col(6), (1, 2));
    }
}
