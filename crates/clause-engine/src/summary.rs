//! Extractive document summary

use crate::normalize::word_count;
use crate::patterns::{contains_any, SUMMARY_KEY_TERMS};
use crate::segment::sentence_windows;

/// Sentences scanned for key terms
const SCAN_SENTENCES: usize = 20;
/// Sentences kept in the summary
const SUMMARY_SENTENCES: usize = 3;

/// Summarize `text` from its own sentences
///
/// Keeps up to three of the first twenty sentences that mention a contract
/// term such as "agreement" or "obligations". Falls back to a generic sentence
/// with the word count when none do.
pub fn generate_summary(text: &str) -> String {
    let key_sentences: Vec<&str> = sentence_windows(text)
        .into_iter()
        .take(SCAN_SENTENCES)
        .map(|w| w.text(text))
        .filter(|s| contains_any(&s.to_lowercase(), SUMMARY_KEY_TERMS))
        .take(SUMMARY_SENTENCES)
        .collect();

    if key_sentences.is_empty() {
        return format!(
            "This legal document contains {} words and appears to be a contract or agreement. \
             Key terms and conditions should be reviewed carefully.",
            word_count(text)
        );
    }

    let mut summary = key_sentences.join(" ");
    if !summary.ends_with(['.', '!', '?']) {
        summary.push('.');
    }
    summary
}
