//! Text cleanup for extracted document text
//!
//! PDF extraction leaves NUL bytes, private-use bullet glyphs and ragged
//! whitespace behind. Offsets reported by the extractor always refer to the
//! normalized string, never to the raw input.

/// Private-use code point many PDF fonts emit for list bullets
const PDF_BULLET: char = '\u{f0b7}';

/// Collapse whitespace runs to a single space, drop NULs, map PDF bullets to `•`
pub fn normalize_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '\0')
        .map(|c| if c == PDF_BULLET { '•' } else { c })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
