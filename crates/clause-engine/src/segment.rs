//! Sentence windows
//!
//! Splits a document into trimmed spans bounded by sentence-ending
//! punctuation or blank lines. Windows keep their terminating punctuation and
//! are expressed as byte offsets into the original string, so every window is
//! a valid slice of the caller's document.

use lazy_static::lazy_static;
use regex::Regex;

use crate::patterns::{abbreviation_kind, AbbreviationKind};

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[ \t\r]*\n").unwrap();
}

/// Half-open byte range `[start, end)` of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }
}

/// Segment `document` into non-overlapping sentence windows in document order
pub fn sentence_windows(document: &str) -> Vec<Window> {
    let mut windows = Vec::new();
    let mut paragraph_start = 0;

    for brk in PARAGRAPH_BREAK.find_iter(document) {
        split_sentences(document, paragraph_start, brk.start(), &mut windows);
        paragraph_start = brk.end();
    }
    split_sentences(document, paragraph_start, document.len(), &mut windows);

    windows
}

fn split_sentences(document: &str, start: usize, end: usize, out: &mut Vec<Window>) {
    let paragraph = &document[start..end];
    let mut sentence_start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        // Absorb "?!", "..." and closing quotes or brackets into this boundary
        let mut boundary_end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '”' | '’') {
                boundary_end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        // "1.5", "example.com" and similar stay inside the sentence
        let followed_by_space = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if !followed_by_space {
            continue;
        }
        if c == '.' && !ends_sentence_after(paragraph, i, boundary_end) {
            continue;
        }

        push_trimmed(document, start + sentence_start, start + boundary_end, out);
        sentence_start = boundary_end;
    }

    push_trimmed(document, start + sentence_start, end, out);
}

/// Whether the period at byte `period` closes its sentence
///
/// Ambiguous abbreviations and initials close it only when the next word
/// starts with an uppercase letter or other non-continuation character.
fn ends_sentence_after(paragraph: &str, period: usize, boundary_end: usize) -> bool {
    match abbreviation_kind(token_ending_at(paragraph, period)) {
        None => true,
        Some(AbbreviationKind::Fixed) => false,
        Some(AbbreviationKind::Ambiguous) => paragraph[boundary_end..]
            .trim_start()
            .chars()
            .next()
            .map_or(true, |next| !(next.is_lowercase() || next.is_ascii_digit())),
    }
}

/// The whitespace-delimited token that ends right before byte `end`
fn token_ending_at(text: &str, end: usize) -> &str {
    let head = &text[..end];
    let token_start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(p, c)| p + c.len_utf8());
    &head[token_start..]
}

fn push_trimmed(document: &str, start: usize, end: usize, out: &mut Vec<Window>) {
    let slice = &document[start..end];
    let lead = slice.len() - slice.trim_start().len();
    let trail = slice.len() - slice.trim_end().len();

    if start + lead < end - trail {
        out.push(Window {
            start: start + lead,
            end: end - trail,
        });
    }
}
