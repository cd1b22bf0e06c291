//! Clause extraction
//!
//! Wraps a [`ClauseDetector`] and enforces the output contract: every match
//! is a valid, non-empty slice of the document, no two matches overlap, and
//! matches are ordered by `start_index`.

use std::cmp::Ordering;

use shared_types::ClauseMatch;
use tracing::{debug, instrument};

use crate::detector::{ClauseDetector, RuleBasedDetector};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ClauseExtractor<D = RuleBasedDetector> {
    detector: D,
}

impl ClauseExtractor<RuleBasedDetector> {
    /// Extractor using the built-in rule tables
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(RuleBasedDetector::with_defaults()?))
    }
}

impl<D: ClauseDetector> ClauseExtractor<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Detect clauses in `document`
    ///
    /// Returns an empty vector for empty input or when nothing matches.
    #[instrument(skip_all, fields(detector = self.detector.name(), bytes = document.len()))]
    pub fn extract(&self, document: &str) -> Vec<ClauseMatch> {
        if document.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<ClauseMatch> = self
            .detector
            .detect(document)
            .into_iter()
            .filter_map(|c| clamp_to_document(c, document))
            .collect();
        let candidate_count = candidates.len();

        let mut kept = resolve_overlaps(candidates);
        kept.sort_by_key(|m| m.start_index);

        debug!(
            candidates = candidate_count,
            kept = kept.len(),
            "resolved overlapping candidates"
        );
        kept
    }
}

/// Clamp a candidate's span to the document and its character boundaries
///
/// The text is re-sliced from the document so it always agrees with the
/// offsets. Returns `None` if nothing of the span remains.
pub fn clamp_to_document(mut candidate: ClauseMatch, document: &str) -> Option<ClauseMatch> {
    let len = document.len();
    let mut start = candidate.start_index.min(len);
    let mut end = candidate.end_index.min(len);

    while !document.is_char_boundary(start) {
        start -= 1;
    }
    while !document.is_char_boundary(end) {
        end += 1;
    }
    if start >= end {
        return None;
    }

    candidate.start_index = start;
    candidate.end_index = end;
    candidate.text = document[start..end].to_string();
    candidate.confidence = if candidate.confidence.is_nan() {
        0.0
    } else {
        candidate.confidence.clamp(0.0, 1.0)
    };
    Some(candidate)
}

/// Order in which overlapping candidates claim their span
///
/// Higher confidence first, then earlier start, then longer span, then higher
/// risk, then clause type declaration order.
fn priority(a: &ClauseMatch, b: &ClauseMatch) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then(a.start_index.cmp(&b.start_index))
        .then(b.len().cmp(&a.len()))
        .then(b.risk_level.cmp(&a.risk_level))
        .then(a.clause_type.cmp(&b.clause_type))
}

/// Keep a pairwise non-overlapping subset of `candidates`
///
/// Candidates are visited in priority order and kept unless they intersect
/// one already kept. The result is in priority order, not document order.
pub fn resolve_overlaps(mut candidates: Vec<ClauseMatch>) -> Vec<ClauseMatch> {
    candidates.sort_by(priority);

    let mut kept: Vec<ClauseMatch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let position = candidate.position();
        if kept.iter().all(|k| !k.position().overlaps(&position)) {
            kept.push(candidate);
        }
    }
    kept
}
