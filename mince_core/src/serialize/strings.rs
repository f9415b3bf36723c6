// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String literal re-escaping (§4.5.4): shortest-quote selection plus
//! optional `</script`/`]]>` escaping for strings embedded in HTML or XML
//! hosts.

/// Re-escapes `value` choosing whichever of `'`/`"` needs fewer escapes,
/// breaking ties toward `'` to match this stack's own string-literal
/// emission preference elsewhere in the pipeline.
pub(crate) fn escape_string(value: &str, inline_safe: bool) -> String {
    let double_count = value.chars().filter(|&c| c == '"').count();
    let single_count = value.chars().filter(|&c| c == '\'').count();
    let quote = if single_count > double_count { '"' } else { '\'' };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '<' if inline_safe && matches_ci(&mut chars.clone(), "/script") => {
                out.push_str("<\\/");
                for _ in 0.."/script".len() {
                    chars.next();
                }
            }
            ']' if inline_safe && chars.peek() == Some(&']') => {
                // Look ahead for the full `]]>` sequence before escaping.
                let mut lookahead = chars.clone();
                lookahead.next();
                if lookahead.peek() == Some(&'>') {
                    out.push_str("]\\]");
                    chars.next();
                    chars.next();
                    out.push('>');
                } else {
                    out.push(c);
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn matches_ci(chars: &mut std::iter::Peekable<std::str::Chars>, rest: &str) -> bool {
    for expected in rest.chars() {
        match chars.next() {
            Some(c) if c.to_ascii_lowercase() == expected.to_ascii_lowercase() => continue,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefers_single_quotes_when_tied() {
        assert_eq!(escape_string("hello", false), "'hello'");
    }

    #[test]
    fn picks_the_quote_with_fewer_escapes() {
        assert_eq!(escape_string("it's", false), "\"it's\"");
        assert_eq!(escape_string("say \"hi\"", false), "'say \"hi\"'");
    }

    #[test]
    fn escapes_script_close_tag_when_inline_safe() {
        let out = escape_string("</script>", true);
        assert!(out.contains("<\\/"));
    }
}
