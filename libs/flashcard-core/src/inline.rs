//! Inline span scanning: bold (`**x**`), inline code (`` `x` ``) and emphasis.

use std::ops::Range;

const HIGHLIGHT_DELIMITERS: &[&str] = &["**", "`"];
const MARKUP_DELIMITERS: &[&str] = &["**", "`", "*"];

/// A delimited span within a line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    /// Byte range of the span including its delimiters.
    pub range: Range<usize>,
    pub inner: &'a str,
}

/// Bold and inline-code spans, left to right.
///
/// Spans never cross a line break and never have empty inner text.
pub fn highlights(text: &str) -> Vec<Span<'_>> {
    scan(text, HIGHLIGHT_DELIMITERS)
}

/// Remove bold, emphasis and code delimiters, keeping the inner text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in scan(text, MARKUP_DELIMITERS) {
        out.push_str(&text[last..span.range.start]);
        out.push_str(span.inner);
        last = span.range.end;
    }
    out.push_str(&text[last..]);
    out
}

fn scan<'a>(text: &'a str, delimiters: &[&str]) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(|c: char| c == '*' || c == '`') {
        let start = pos + offset;
        let Some(delim) = delimiters.iter().find(|d| text[start..].starts_with(**d)) else {
            pos = start + 1;
            continue;
        };

        let inner_start = start + delim.len();
        if *delim == "*" && text[inner_start..].starts_with(char::is_whitespace) {
            pos = inner_start;
            continue;
        }

        match closing(text, inner_start, delim) {
            Some(len) if len > 0 && !text[inner_start..inner_start + len].contains('\n') => {
                let end = inner_start + len + delim.len();
                spans.push(Span {
                    range: start..end,
                    inner: &text[inner_start..inner_start + len],
                });
                pos = end;
            }
            _ => pos = inner_start,
        }
    }

    spans
}

/// Length of the inner text before the closing `delim`.
///
/// A lone `*` only closes when it directly follows non-whitespace, so
/// arithmetic like `2 * 3` is never taken for emphasis.
fn closing(text: &str, from: usize, delim: &str) -> Option<usize> {
    let mut at = from;
    while let Some(offset) = text[at..].find(delim) {
        let end = at + offset;
        if delim != "*" || !text[from..end].ends_with(char::is_whitespace) {
            return Some(end - from);
        }
        at = end + delim.len();
    }
    None
}
