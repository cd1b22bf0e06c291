//! Rule-based legal clause detection and risk scoring
//!
//! The pipeline is text → [`ClauseExtractor`] → clauses → [`RiskScorer`] →
//! [`RiskReport`]. [`ClauseEngine`] wires both halves together and adds text
//! normalization and a short summary for whole-document analysis.

pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod normalize;
pub mod patterns;
pub mod rules;
pub mod scoring;
pub mod segment;
pub mod summary;

pub use config::{EngineConfig, ExtractionConfig, ScoringConfig};
pub use detector::{ClauseDetector, RuleBasedDetector};
pub use error::{EngineError, Result};
pub use extractor::ClauseExtractor;
pub use normalize::normalize_text;
pub use rules::{RuleRegistry, RuleRegistryBuilder};
pub use scoring::{summarize_risk, RiskScorer, ScoringTable};
pub use summary::generate_summary;

use shared_types::{ClauseMatch, ClauseType, DocumentAnalysis, RiskReport};
use tracing::{info, instrument};

/// ClauseEngine entry point
///
/// Built once, then shared freely: every method takes `&self` and keeps no
/// state between calls.
#[derive(Debug, Clone)]
pub struct ClauseEngine<D = RuleBasedDetector> {
    extractor: ClauseExtractor<D>,
    scorer: RiskScorer,
}

impl ClauseEngine<RuleBasedDetector> {
    /// Engine with the built-in rules and weights
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with the built-in rules and the given tuning
    ///
    /// Every table and threshold is validated here, so a misconfigured engine
    /// is never handed out.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let detector = RuleBasedDetector::new(RuleRegistry::builtin()?, config.extraction);
        Self::from_parts(detector, config.scoring)
    }
}

impl<D: ClauseDetector> ClauseEngine<D> {
    /// Engine around a custom detector
    pub fn from_parts(detector: D, scoring: ScoringConfig) -> Result<Self> {
        Ok(Self {
            extractor: ClauseExtractor::new(detector),
            scorer: RiskScorer::from_config(scoring)?,
        })
    }

    pub fn detector(&self) -> &D {
        self.extractor.detector()
    }

    /// Non-overlapping clauses in `document`, ordered by `start_index`
    pub fn extract(&self, document: &str) -> Vec<ClauseMatch> {
        self.extractor.extract(document)
    }

    pub fn score(&self, clauses: &[ClauseMatch]) -> Result<RiskReport> {
        self.scorer.score(clauses)
    }

    /// Score clauses supplied as a JSON array
    pub fn score_json(&self, json: &str) -> Result<RiskReport> {
        self.score(&parse_clauses(json)?)
    }

    /// Normalize, extract, score and summarize one document
    ///
    /// Clause offsets index into `DocumentAnalysis::text`, the normalized
    /// form of `raw`.
    #[instrument(skip_all, fields(bytes = raw.len()))]
    pub fn analyze(&self, raw: &str) -> Result<DocumentAnalysis> {
        let text = normalize_text(raw);
        let clauses = self.extract(&text);
        let report = self.score(&clauses)?;
        let risk_summary = summarize_risk(&clauses);

        let analysis_confidence = if clauses.is_empty() {
            0.0
        } else {
            clauses.iter().map(|c| c.confidence).sum::<f64>() / clauses.len() as f64
        };

        info!(
            clauses = clauses.len(),
            score = report.score,
            level = %report.level,
            "document analyzed"
        );

        Ok(DocumentAnalysis {
            summary: generate_summary(&text),
            total_words: normalize::word_count(&text),
            text,
            clauses,
            report,
            risk_summary,
            analysis_confidence,
        })
    }

    /// Like [`ClauseEngine::analyze`], rejecting input that is not UTF-8
    pub fn analyze_bytes(&self, raw: &[u8]) -> Result<DocumentAnalysis> {
        self.analyze(std::str::from_utf8(raw)?)
    }
}

/// Parse a JSON array of clauses
///
/// An unrecognised `type` is reported as [`EngineError::UnknownClauseType`];
/// any other malformed input as [`EngineError::InvalidInput`].
pub fn parse_clauses(json: &str) -> Result<Vec<ClauseMatch>> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| EngineError::InvalidInput(e.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| EngineError::InvalidInput("expected a JSON array of clauses".to_string()))?;

    for item in items {
        if let Some(name) = item.get("type").and_then(|t| t.as_str()) {
            name.parse::<ClauseType>()?;
        }
    }

    serde_json::from_value(value).map_err(|e| EngineError::InvalidInput(e.to_string()))
}
