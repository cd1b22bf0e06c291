//! Risk scoring
//!
//! Turns a clause sequence into a 0-100 score. Each clause contributes its
//! `(type, risk level)` weight; within a type, the heaviest occurrence counts
//! in full and every further one is discounted by the repeat multiplier, so
//! several distinct risks outscore one clause repeated many times.

mod table;

pub use table::{ScoringTable, TypeScoring};

use std::collections::BTreeMap;

use shared_types::{ClauseMatch, ClauseType, RiskLevel, RiskReport, RiskSummary};
use tracing::{debug, instrument};

use crate::config::ScoringConfig;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone)]
pub struct RiskScorer {
    table: ScoringTable,
    config: ScoringConfig,
}

impl RiskScorer {
    /// Validate `config` and use its weight table, or the built-in one
    pub fn from_config(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        let table = config.weights.clone().unwrap_or_default();
        table.validate()?;
        Ok(Self { table, config })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::from_config(ScoringConfig::default())
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Score `clauses`
    ///
    /// Fails on the first clause that breaks its span invariants; nothing is
    /// scored partially.
    #[instrument(skip_all, fields(clauses = clauses.len()))]
    pub fn score(&self, clauses: &[ClauseMatch]) -> Result<RiskReport> {
        if clauses.is_empty() {
            return Ok(RiskReport::empty());
        }

        let mut weights: BTreeMap<ClauseType, Vec<f64>> = BTreeMap::new();
        for (index, clause) in clauses.iter().enumerate() {
            clause
                .check_shape()
                .map_err(|reason| EngineError::InvalidClause { index, reason })?;
            let weight = self.table.weight(clause.clause_type, clause.risk_level)?;
            weights.entry(clause.clause_type).or_default().push(weight);
        }

        let breakdown: BTreeMap<ClauseType, f64> = weights
            .into_iter()
            .map(|(ty, w)| (ty, self.diminished_total(w)))
            .collect();

        let total: f64 = breakdown.values().sum();
        let score = total.round().clamp(0.0, 100.0) as u8;
        let level = self.config.level_for(score);
        let recommendations = self.recommendations(&breakdown);

        debug!(score, %level, types = breakdown.len(), "scored clauses");

        Ok(RiskReport {
            score,
            breakdown,
            level,
            recommendations,
        })
    }

    /// Heaviest weight in full, the rest at `repeat_multiplier`
    fn diminished_total(&self, mut weights: Vec<f64>) -> f64 {
        weights.sort_by(|a, b| b.total_cmp(a));
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    *w
                } else {
                    w * self.config.repeat_multiplier
                }
            })
            .sum()
    }

    /// One advisory per type, largest contribution first
    fn recommendations(&self, breakdown: &BTreeMap<ClauseType, f64>) -> Vec<String> {
        let mut ranked: Vec<(ClauseType, f64)> =
            breakdown.iter().map(|(ty, points)| (*ty, *points)).collect();
        // Stable sort keeps declaration order among equal contributions
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .filter_map(|(ty, _)| self.table.advice(ty))
            .take(self.config.max_recommendations)
            .map(str::to_string)
            .collect()
    }
}

/// Count-based overview of `clauses`
///
/// Any high-risk clause makes the document high risk; more than two medium
/// clauses make it medium.
pub fn summarize_risk(clauses: &[ClauseMatch]) -> RiskSummary {
    let high_risk_count = clauses
        .iter()
        .filter(|c| c.risk_level == RiskLevel::High)
        .count();
    let medium_risk_count = clauses
        .iter()
        .filter(|c| c.risk_level == RiskLevel::Medium)
        .count();

    let (level, summary) = if clauses.is_empty() {
        (RiskLevel::Low, "No significant risks identified".to_string())
    } else if high_risk_count > 0 {
        (
            RiskLevel::High,
            format!(
                "High-risk document with {} concerning clauses",
                high_risk_count
            ),
        )
    } else if medium_risk_count > 2 {
        (
            RiskLevel::Medium,
            format!(
                "Medium-risk document with {} clauses requiring attention",
                medium_risk_count
            ),
        )
    } else {
        (
            RiskLevel::Low,
            format!("Low-risk document with {} standard clauses", clauses.len()),
        )
    };

    RiskSummary {
        level,
        total_clauses: clauses.len(),
        high_risk_count,
        medium_risk_count,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "Some clause text that is long enough for several spans.";

    fn clause(ty: ClauseType, level: RiskLevel, start: usize) -> ClauseMatch {
        let end = start + 5;
        ClauseMatch {
            clause_type: ty,
            text: DOC[start..end].to_string(),
            start_index: start,
            end_index: end,
            risk_level: level,
            explanation: String::new(),
            confidence: 0.7,
        }
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let report = scorer.score(&[]).unwrap();
        assert_eq!(report, RiskReport::empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_single_clause_uses_table_weight() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let report = scorer
            .score(&[clause(ClauseType::DataSharing, RiskLevel::High, 0)])
            .unwrap();
        assert_eq!(report.score, 30);
        assert_eq!(report.breakdown[&ClauseType::DataSharing], 30.0);
        assert_eq!(report.level, RiskLevel::Low);
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn test_repeats_are_discounted() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let one = scorer
            .score(&[clause(ClauseType::Liability, RiskLevel::High, 0)])
            .unwrap();
        let three = scorer
            .score(&[
                clause(ClauseType::Liability, RiskLevel::High, 0),
                clause(ClauseType::Liability, RiskLevel::High, 10),
                clause(ClauseType::Liability, RiskLevel::High, 20),
            ])
            .unwrap();

        assert_eq!(one.score, 25);
        assert_eq!(three.score, 50);
        assert!(three.score > one.score && (three.score as u32) < 3 * one.score as u32);
    }

    #[test]
    fn test_repeats_never_count_in_full() {
        let config = ScoringConfig {
            repeat_multiplier: 1.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            RiskScorer::from_config(config),
            Err(EngineError::InvalidConfig(_))
        ));

        let scorer = RiskScorer::from_config(ScoringConfig {
            repeat_multiplier: 0.9,
            ..ScoringConfig::default()
        })
        .unwrap();
        let three = scorer
            .score(&[
                clause(ClauseType::Liability, RiskLevel::High, 0),
                clause(ClauseType::Liability, RiskLevel::High, 10),
                clause(ClauseType::Liability, RiskLevel::High, 20),
            ])
            .unwrap();
        assert!(three.score < 75);
    }

    #[test]
    fn test_heaviest_occurrence_counts_in_full() {
        let scorer = RiskScorer::with_defaults().unwrap();
        // Low first in document order must not discount the later high one
        let report = scorer
            .score(&[
                clause(ClauseType::Arbitration, RiskLevel::Low, 0),
                clause(ClauseType::Arbitration, RiskLevel::High, 10),
            ])
            .unwrap();
        assert_eq!(report.breakdown[&ClauseType::Arbitration], 25.0 + 3.0);
    }

    #[test]
    fn test_level_and_clamp() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let all_high: Vec<_> = ClauseType::ALL
            .iter()
            .enumerate()
            .map(|(i, ty)| clause(*ty, RiskLevel::High, i * 5))
            .collect();
        let report = scorer.score(&all_high).unwrap();
        assert_eq!(report.score, 100);
        assert_eq!(report.level, RiskLevel::High);
        assert_eq!(report.breakdown.len(), ClauseType::ALL.len());
        assert_eq!(report.recommendations.len(), 5);
    }

    #[test]
    fn test_recommendations_follow_contribution() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let report = scorer
            .score(&[
                clause(ClauseType::Cancellation, RiskLevel::Low, 0),
                clause(ClauseType::DataSharing, RiskLevel::High, 10),
                clause(ClauseType::AutoRenewal, RiskLevel::Medium, 20),
            ])
            .unwrap();
        let table = ScoringTable::builtin();
        assert_eq!(
            report.recommendations,
            vec![
                table.advice(ClauseType::DataSharing).unwrap().to_string(),
                table.advice(ClauseType::AutoRenewal).unwrap().to_string(),
                table.advice(ClauseType::Cancellation).unwrap().to_string(),
            ]
        );
    }

    #[test]
    fn test_equal_contributions_keep_declaration_order() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let report = scorer
            .score(&[
                clause(ClauseType::Liability, RiskLevel::High, 0),
                clause(ClauseType::Arbitration, RiskLevel::High, 10),
            ])
            .unwrap();
        let table = ScoringTable::builtin();
        assert_eq!(
            report.recommendations[0],
            table.advice(ClauseType::Arbitration).unwrap()
        );
    }

    #[test]
    fn test_recommendation_cap_from_config() {
        let config = ScoringConfig {
            max_recommendations: 2,
            ..ScoringConfig::default()
        };
        let scorer = RiskScorer::from_config(config).unwrap();
        let all: Vec<_> = ClauseType::ALL
            .iter()
            .enumerate()
            .map(|(i, ty)| clause(*ty, RiskLevel::Medium, i * 5))
            .collect();
        assert_eq!(scorer.score(&all).unwrap().recommendations.len(), 2);
    }

    #[test]
    fn test_invalid_clause_reports_index() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let mut bad = clause(ClauseType::Liability, RiskLevel::High, 10);
        bad.end_index = bad.start_index;

        let result = scorer.score(&[clause(ClauseType::Liability, RiskLevel::Low, 0), bad]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidClause { index: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let scorer = RiskScorer::with_defaults().unwrap();
        let mut bad = clause(ClauseType::Liability, RiskLevel::High, 0);
        bad.confidence = 1.5;
        assert!(scorer.score(&[bad]).is_err());
    }

    #[test]
    fn test_incomplete_custom_table_fails_at_construction() {
        let mut json = serde_json::to_value(ScoringTable::builtin()).unwrap();
        json.as_object_mut().unwrap().remove("termination");
        let table: ScoringTable = serde_json::from_value(json).unwrap();

        let config = ScoringConfig {
            weights: Some(table),
            ..ScoringConfig::default()
        };
        assert!(matches!(
            RiskScorer::from_config(config),
            Err(EngineError::MissingWeight {
                clause_type: ClauseType::Termination,
                ..
            })
        ));
    }

    #[test]
    fn test_summary_levels() {
        let empty = summarize_risk(&[]);
        assert_eq!(empty.level, RiskLevel::Low);
        assert_eq!(empty.summary, "No significant risks identified");

        let high = summarize_risk(&[
            clause(ClauseType::Liability, RiskLevel::High, 0),
            clause(ClauseType::Cancellation, RiskLevel::Low, 10),
        ]);
        assert_eq!(high.level, RiskLevel::High);
        assert_eq!(high.high_risk_count, 1);
        assert_eq!(high.summary, "High-risk document with 1 concerning clauses");

        let two_medium = summarize_risk(&[
            clause(ClauseType::Liability, RiskLevel::Medium, 0),
            clause(ClauseType::Termination, RiskLevel::Medium, 10),
        ]);
        assert_eq!(two_medium.level, RiskLevel::Low);
        assert_eq!(two_medium.summary, "Low-risk document with 2 standard clauses");

        let three_medium = summarize_risk(&[
            clause(ClauseType::Liability, RiskLevel::Medium, 0),
            clause(ClauseType::Termination, RiskLevel::Medium, 10),
            clause(ClauseType::Arbitration, RiskLevel::Medium, 20),
        ]);
        assert_eq!(three_medium.level, RiskLevel::Medium);
        assert_eq!(three_medium.medium_risk_count, 3);
    }
}
