use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Clause taxonomy recognised by the engine.
///
/// Declaration order is significant: it is the final tie-break when two
/// candidate clauses are otherwise equal, and the order recommendations fall
/// back to when contributions tie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClauseType {
    DataSharing,
    AutoRenewal,
    Arbitration,
    Liability,
    Cancellation,
    Confidentiality,
    Termination,
}

impl ClauseType {
    pub const ALL: [ClauseType; 7] = [
        ClauseType::DataSharing,
        ClauseType::AutoRenewal,
        ClauseType::Arbitration,
        ClauseType::Liability,
        ClauseType::Cancellation,
        ClauseType::Confidentiality,
        ClauseType::Termination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::DataSharing => "data_sharing",
            ClauseType::AutoRenewal => "auto_renewal",
            ClauseType::Arbitration => "arbitration",
            ClauseType::Liability => "liability",
            ClauseType::Cancellation => "cancellation",
            ClauseType::Confidentiality => "confidentiality",
            ClauseType::Termination => "termination",
        }
    }

    /// Human-readable label, e.g. "data sharing"
    pub fn label(&self) -> &'static str {
        match self {
            ClauseType::DataSharing => "data sharing",
            ClauseType::AutoRenewal => "auto-renewal",
            ClauseType::Arbitration => "arbitration",
            ClauseType::Liability => "liability",
            ClauseType::Cancellation => "cancellation",
            ClauseType::Confidentiality => "confidentiality",
            ClauseType::Termination => "termination",
        }
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known clause type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown clause type: {0}")]
pub struct ParseClauseTypeError(pub String);

impl FromStr for ClauseType {
    type Err = ParseClauseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClauseType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseClauseTypeError(s.to_string()))
    }
}

/// Coarse severity of a detected clause, ordered `Low < Medium < High`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// One step down, saturating at `Low`
    pub fn lowered(self) -> Self {
        match self {
            RiskLevel::High => RiskLevel::Medium,
            RiskLevel::Medium | RiskLevel::Low => RiskLevel::Low,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextPosition {
    pub start_offset: usize, // Byte offset into the analyzed text
    pub end_offset: usize,   // Exclusive end offset
}

impl TextPosition {
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Half-open ranges overlap when each starts before the other ends
    pub fn overlaps(&self, other: &TextPosition) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }
}

/// One detected clause occurrence
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClauseMatch {
    #[serde(rename = "type")]
    pub clause_type: ClauseType,
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub confidence: f64,
}

impl ClauseMatch {
    pub fn position(&self) -> TextPosition {
        TextPosition {
            start_offset: self.start_index,
            end_offset: self.end_index,
        }
    }

    pub fn len(&self) -> usize {
        self.position().len()
    }

    pub fn is_empty(&self) -> bool {
        self.position().is_empty()
    }

    /// Checks the span invariants without a source document:
    /// non-empty span, text length matching the span, confidence in `[0, 1]`.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.start_index >= self.end_index {
            return Err(format!(
                "empty or inverted span [{}, {})",
                self.start_index, self.end_index
            ));
        }
        if self.text.len() != self.end_index - self.start_index {
            return Err(format!(
                "text is {} bytes but span [{}, {}) is {} bytes",
                self.text.len(),
                self.start_index,
                self.end_index,
                self.end_index - self.start_index
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} outside [0, 1]", self.confidence));
        }
        Ok(())
    }

    /// Checks that the match is a faithful slice of `document`
    pub fn check_against(&self, document: &str) -> Result<(), String> {
        self.check_shape()?;
        match document.get(self.start_index..self.end_index) {
            Some(slice) if slice == self.text => Ok(()),
            Some(_) => Err(format!(
                "text differs from document[{}..{}]",
                self.start_index, self.end_index
            )),
            None => Err(format!(
                "span [{}, {}) is not a valid slice of a {}-byte document",
                self.start_index,
                self.end_index,
                document.len()
            )),
        }
    }
}

/// Aggregate score for a set of clauses
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskReport {
    pub score: u8,
    /// Points contributed per clause type, only for types that were found
    pub breakdown: BTreeMap<ClauseType, f64>,
    pub level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl RiskReport {
    pub fn empty() -> Self {
        Self {
            score: 0,
            breakdown: BTreeMap::new(),
            level: RiskLevel::Low,
            recommendations: Vec::new(),
        }
    }
}

/// Count-based overview of the clauses in a document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RiskSummary {
    pub level: RiskLevel,
    pub total_clauses: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub summary: String,
}

/// Full result of analyzing one document
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentAnalysis {
    /// Normalized text; every clause offset indexes into this string
    pub text: String,
    pub summary: String,
    pub clauses: Vec<ClauseMatch>,
    pub report: RiskReport,
    pub risk_summary: RiskSummary,
    pub total_words: usize,
    pub analysis_confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(document: &str, start: usize, end: usize) -> ClauseMatch {
        ClauseMatch {
            clause_type: ClauseType::Arbitration,
            text: document[start..end].to_string(),
            start_index: start,
            end_index: end,
            risk_level: RiskLevel::High,
            explanation: "binding arbitration".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_clause_type_round_trips_through_str() {
        for ty in ClauseType::ALL {
            assert_eq!(ty.as_str().parse::<ClauseType>(), Ok(ty));
        }
        assert_eq!(
            "indemnity".parse::<ClauseType>(),
            Err(ParseClauseTypeError("indemnity".to_string()))
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::High.lowered(), RiskLevel::Medium);
        assert_eq!(RiskLevel::Low.lowered(), RiskLevel::Low);
    }

    #[test]
    fn test_clause_match_serializes_type_field() {
        let doc = "Disputes go to binding arbitration.";
        let m = sample(doc, 0, doc.len());
        let json = serde_json::to_value(&m).unwrap();

        assert_eq!(json["type"], "arbitration");
        assert_eq!(json["risk_level"], "high");
        assert_eq!(json["start_index"], 0);
        assert_eq!(json["end_index"], doc.len());
    }

    #[test]
    fn test_unknown_type_rejected_on_deserialize() {
        let json = r#"{"type":"indemnity","text":"x","start_index":0,"end_index":1,
                      "risk_level":"low","explanation":"","confidence":0.5}"#;
        assert!(serde_json::from_str::<ClauseMatch>(json).is_err());
    }

    #[test]
    fn test_report_breakdown_keys_serialize_as_strings() {
        let mut report = RiskReport::empty();
        report.breakdown.insert(ClauseType::DataSharing, 30.0);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"data_sharing\":30.0"));

        let back: RiskReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_check_against_document() {
        let doc = "Intro. Disputes go to binding arbitration.";
        let m = sample(doc, 7, doc.len());
        assert!(m.check_against(doc).is_ok());

        let mut shifted = m.clone();
        shifted.start_index = 6;
        assert!(shifted.check_shape().is_err());

        let mut wrong_text = m;
        wrong_text.text = "X".repeat(wrong_text.text.len());
        assert!(wrong_text.check_against(doc).is_err());
    }

    #[test]
    fn test_positions_overlap_half_open() {
        let a = TextPosition { start_offset: 0, end_offset: 5 };
        let b = TextPosition { start_offset: 5, end_offset: 9 };
        let c = TextPosition { start_offset: 4, end_offset: 6 };
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }
}
