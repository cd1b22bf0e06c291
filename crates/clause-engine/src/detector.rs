//! Clause detection strategies
//!
//! A detector proposes candidate clauses; it does not need to resolve
//! overlaps or sort its output. [`crate::extractor::ClauseExtractor`] turns
//! any detector's candidates into the final, non-overlapping sequence.

use shared_types::ClauseMatch;
use tracing::{debug, instrument};

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::rules::RuleRegistry;
use crate::segment::sentence_windows;

/// Source of candidate clause matches
pub trait ClauseDetector: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Propose candidates for `document`
    ///
    /// Offsets must refer to `document`. Candidates may overlap.
    fn detect(&self, document: &str) -> Vec<ClauseMatch>;
}

/// Pattern-matching detector driven by a [`RuleRegistry`]
///
/// Every rule is evaluated against every sentence window; each hit becomes a
/// candidate spanning the whole window.
#[derive(Debug, Clone)]
pub struct RuleBasedDetector {
    registry: RuleRegistry,
    config: ExtractionConfig,
}

impl RuleBasedDetector {
    pub fn new(registry: RuleRegistry, config: ExtractionConfig) -> Self {
        Self { registry, config }
    }

    /// Built-in rules with default confidences
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(RuleRegistry::builtin()?, ExtractionConfig::default()))
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}

impl ClauseDetector for RuleBasedDetector {
    fn name(&self) -> &str {
        "rule-based"
    }

    #[instrument(skip_all, fields(rules_version = self.registry.version()))]
    fn detect(&self, document: &str) -> Vec<ClauseMatch> {
        let mut candidates = Vec::new();

        for window in sentence_windows(document) {
            let text = window.text(document);
            let text_lower = text.to_lowercase();
            let before = candidates.len();

            for signature in self.registry.signatures() {
                for rule in &signature.rules {
                    if !rule.matches(text, &text_lower) {
                        continue;
                    }

                    let confidence = self.config.confidence_for(rule.specificity);
                    if confidence < self.config.min_confidence {
                        continue;
                    }

                    let risk_level = signature.assess_risk(rule.base_risk, text);
                    candidates.push(ClauseMatch {
                        clause_type: signature.clause_type,
                        text: text.to_string(),
                        start_index: window.start,
                        end_index: window.end,
                        risk_level,
                        explanation: format!(
                            "{} Detected: {}.",
                            signature.explanation(risk_level),
                            rule.label
                        ),
                        confidence,
                    });
                }
            }

            if candidates.len() > before {
                debug!(
                    start = window.start,
                    end = window.end,
                    hits = candidates.len() - before,
                    "window matched"
                );
            }
        }

        candidates
    }
}
