// Splits running glossary text into "Term: definition" pairs
//
// A header starts a line with a capital letter, runs over letters, whitespace,
// hyphens, parentheses and slashes, and ends at a colon plus whitespace. The
// definition runs until a newline that is followed by something header-shaped,
// or until the end of the text.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::RawEntry;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([A-Z][A-Za-z\s\-()/]+):\s+").expect("header pattern is valid")
});

// The regex crate has no look-ahead, so the end of a definition is found by
// searching for the next "\nTerm:" from where the definition starts.
static NEXT_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[A-Z][A-Za-z\s\-()/]+:").expect("terminator pattern is valid")
});

/// Segment `text` into raw term/definition pairs in document order.
///
/// Terms are trimmed and definitions whitespace-collapsed; pairs left with an
/// empty side are dropped.
pub fn segment(text: &str) -> Vec<RawEntry> {
    let mut entries = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = HEADER.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(term)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let def_start = whole.end();
        let def_end = NEXT_HEADER
            .find_at(text, def_start)
            .map_or(text.len(), |m| m.start());

        let term = term.as_str().trim();
        let definition = collapse_whitespace(&text[def_start..def_end]);
        if !term.is_empty() && !definition.is_empty() {
            entries.push(RawEntry::new(term, definition));
        }

        pos = def_end;
    }

    entries
}

/// Replace every whitespace run (newlines included) with one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
