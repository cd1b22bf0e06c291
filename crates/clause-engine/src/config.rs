//! Engine configuration
//!
//! All knobs have defaults, so an empty JSON object is a valid configuration.
//! Values are checked once by [`EngineConfig::validate`] when the engine is
//! built; nothing is re-validated per request.

use serde::{Deserialize, Serialize};
use shared_types::RiskLevel;

use crate::error::{EngineError, Result};
use crate::rules::Specificity;
use crate::scoring::ScoringTable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        self.scoring.validate()
    }
}

/// Confidence assigned per rule specificity, plus a floor below which
/// candidates are discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub phrase_confidence: f64,
    pub keyword_confidence: f64,
    pub structural_confidence: f64,
    pub min_confidence: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            phrase_confidence: 0.9,
            keyword_confidence: 0.7,
            structural_confidence: 0.5,
            min_confidence: 0.0,
        }
    }
}

impl ExtractionConfig {
    pub fn confidence_for(&self, specificity: Specificity) -> f64 {
        match specificity {
            Specificity::Phrase => self.phrase_confidence,
            Specificity::Keyword => self.keyword_confidence,
            Specificity::Structural => self.structural_confidence,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("phrase_confidence", self.phrase_confidence),
            ("keyword_confidence", self.keyword_confidence),
            ("structural_confidence", self.structural_confidence),
            ("min_confidence", self.min_confidence),
        ] {
            check_unit_interval(name, value)?;
        }

        // More specific rules must never score below less specific ones
        if self.phrase_confidence < self.keyword_confidence
            || self.keyword_confidence < self.structural_confidence
        {
            return Err(EngineError::InvalidConfig(
                "confidence must not increase as rule specificity decreases \
                 (phrase >= keyword >= structural)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier applied to every occurrence of a clause type after the first
    pub repeat_multiplier: f64,
    /// Minimum score classified as high risk
    pub high_threshold: u8,
    /// Minimum score classified as medium risk
    pub medium_threshold: u8,
    pub max_recommendations: usize,
    /// Replaces the built-in weight table when present
    pub weights: Option<ScoringTable>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            repeat_multiplier: 0.5,
            high_threshold: 70,
            medium_threshold: 40,
            max_recommendations: 5,
            weights: None,
        }
    }
}

impl ScoringConfig {
    pub fn level_for(&self, score: u8) -> RiskLevel {
        if score >= self.high_threshold {
            RiskLevel::High
        } else if score >= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.repeat_multiplier > 0.0 && self.repeat_multiplier < 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "repeat_multiplier must be in (0, 1), got {}",
                self.repeat_multiplier
            )));
        }
        if self.high_threshold > 100 || self.medium_threshold > self.high_threshold {
            return Err(EngineError::InvalidConfig(format!(
                "thresholds must satisfy medium <= high <= 100, got medium={} high={}",
                self.medium_threshold, self.high_threshold
            )));
        }
        if self.max_recommendations == 0 {
            return Err(EngineError::InvalidConfig(
                "max_recommendations must be at least 1".to_string(),
            ));
        }
        if let Some(table) = &self.weights {
            table.validate()?;
        }
        Ok(())
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )))
    }
}
