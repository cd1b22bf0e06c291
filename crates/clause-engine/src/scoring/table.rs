//! Per-type weight table
//!
//! Points per occurrence for every `(ClauseType, RiskLevel)` pair, plus the
//! advisory text emitted when the type shows up in a report. The table
//! serializes as a JSON object keyed by clause type:
//!
//! ```json
//! { "liability": { "weights": { "high": 25, "medium": 15, "low": 6 },
//!                  "advice": "Review the liability limits." } }
//! ```

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use shared_types::{ClauseType, RiskLevel};

use crate::error::{EngineError, Result};

/// Weights and advice for one clause type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScoring {
    pub weights: BTreeMap<RiskLevel, f64>,
    pub advice: String,
}

impl TypeScoring {
    fn new(high: f64, medium: f64, low: f64, advice: &str) -> Self {
        Self {
            weights: BTreeMap::from([
                (RiskLevel::High, high),
                (RiskLevel::Medium, medium),
                (RiskLevel::Low, low),
            ]),
            advice: advice.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringTable {
    entries: BTreeMap<ClauseType, TypeScoring>,
}

lazy_static! {
    static ref BUILTIN_TABLE: ScoringTable = ScoringTable {
        entries: BTreeMap::from([
            (
                ClauseType::DataSharing,
                TypeScoring::new(
                    30.0,
                    18.0,
                    8.0,
                    "Review data sharing provisions carefully. Ensure you understand what \
                     information is being shared and with whom.",
                ),
            ),
            (
                ClauseType::AutoRenewal,
                TypeScoring::new(
                    25.0,
                    15.0,
                    6.0,
                    "Check auto-renewal terms. Understand your cancellation rights and notice \
                     requirements.",
                ),
            ),
            (
                ClauseType::Arbitration,
                TypeScoring::new(
                    25.0,
                    15.0,
                    6.0,
                    "Arbitration clauses may limit your legal rights. Consider the implications \
                     before agreeing.",
                ),
            ),
            (
                ClauseType::Liability,
                TypeScoring::new(
                    25.0,
                    15.0,
                    6.0,
                    "Liability limitations may affect your ability to recover damages. Review \
                     carefully.",
                ),
            ),
            (
                ClauseType::Cancellation,
                TypeScoring::new(
                    15.0,
                    9.0,
                    4.0,
                    "Understand cancellation terms and any penalties for early termination.",
                ),
            ),
            (
                ClauseType::Confidentiality,
                TypeScoring::new(
                    10.0,
                    6.0,
                    3.0,
                    "Note which information you must keep confidential and how long that \
                     obligation lasts.",
                ),
            ),
            (
                ClauseType::Termination,
                TypeScoring::new(
                    15.0,
                    9.0,
                    4.0,
                    "Check who may end the agreement and how much notice they must give.",
                ),
            ),
        ]),
    };
}

impl ScoringTable {
    /// The default weights
    pub fn builtin() -> Self {
        BUILTIN_TABLE.clone()
    }

    pub fn new(entries: BTreeMap<ClauseType, TypeScoring>) -> Self {
        Self { entries }
    }

    /// Points for one occurrence of `clause_type` at `risk_level`
    pub fn weight(&self, clause_type: ClauseType, risk_level: RiskLevel) -> Result<f64> {
        self.entries
            .get(&clause_type)
            .and_then(|e| e.weights.get(&risk_level))
            .copied()
            .ok_or(EngineError::MissingWeight {
                clause_type,
                risk_level,
            })
    }

    pub fn advice(&self, clause_type: ClauseType) -> Option<&str> {
        self.entries.get(&clause_type).map(|e| e.advice.as_str())
    }

    /// Every clause type needs a finite, non-negative weight at every level
    pub fn validate(&self) -> Result<()> {
        for clause_type in ClauseType::ALL {
            for risk_level in RiskLevel::ALL {
                let weight = self.weight(clause_type, risk_level)?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(EngineError::InvalidConfig(format!(
                        "weight for {} at {} risk must be finite and non-negative, got {}",
                        clause_type, risk_level, weight
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::builtin()
    }
}
