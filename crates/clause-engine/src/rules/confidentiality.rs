//! Confidentiality and non-disclosure clauses

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{MATERIAL_KEYWORDS, SECRECY_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::Confidentiality,
    rules: &[
        RuleSpec {
            id: "confidentiality.non_disclosure",
            pattern: PatternSpec::Phrase(r"\bnon[\s-]?disclosure(?:\s+agreement)?\b"),
            base_risk: RiskLevel::Medium,
            label: "non-disclosure obligation",
        },
        RuleSpec {
            id: "confidentiality.confidential_information",
            pattern: PatternSpec::Phrase(r"\bconfidential\s+(?:information|material|data)\b"),
            base_risk: RiskLevel::Medium,
            label: "confidential information",
        },
        RuleSpec {
            id: "confidentiality.proprietary_information",
            pattern: PatternSpec::Phrase(r"\bproprietary\s+information\b"),
            base_risk: RiskLevel::Low,
            label: "proprietary information",
        },
        RuleSpec {
            id: "confidentiality.trade_secret",
            pattern: PatternSpec::Phrase(r"\btrade\s+secrets?\b"),
            base_risk: RiskLevel::Low,
            label: "trade secrets",
        },
        RuleSpec {
            id: "confidentiality.confidential",
            pattern: PatternSpec::Keyword(r"\bconfidential(?:ity)?\b"),
            base_risk: RiskLevel::Low,
            label: "confidentiality",
        },
        RuleSpec {
            id: "confidentiality.secrecy_obligation",
            pattern: PatternSpec::CoOccurrence(&[SECRECY_KEYWORDS, MATERIAL_KEYWORDS]),
            base_risk: RiskLevel::Medium,
            label: "obligation to keep information secret",
        },
    ],
    escalators: &[
        r"\bin\s+perpetuity\b|\bperpetual\b",
        r"\bindefinite(?:ly)?\b",
        r"\bliquidated\s+damages\b",
        r"\binjunctive\s+relief\b",
    ],
    mitigators: &[
        r"\bmutual(?:ly)?\b",
        r"\bpublicly\s+(?:available|known)\b",
        r"\brequired\s+by\s+law\b",
    ],
    explanations: Explanations {
        high: "This confidentiality clause imposes open-ended or heavily penalized secrecy obligations. Review its duration and remedies.",
        medium: "This confidentiality clause restricts what you may disclose. Make sure the scope is clear.",
        low: "This confidentiality clause sets standard, limited confidentiality terms.",
    },
};

#[cfg(test)]
mod tests {
    use super::super::test_support::best_rule;
    use shared_types::{ClauseType, RiskLevel};

    #[test]
    fn test_perpetual_confidentiality_is_high() {
        let text = "Confidential information must be protected in perpetuity.";
        assert_eq!(
            best_rule(ClauseType::Confidentiality, text),
            Some(("confidentiality.confidential_information", RiskLevel::High))
        );
    }

    #[test]
    fn test_mutual_nda_is_low() {
        let text = "This mutual non-disclosure agreement covers both parties.";
        assert_eq!(
            best_rule(ClauseType::Confidentiality, text),
            Some(("confidentiality.non_disclosure", RiskLevel::Low))
        );
    }

    #[test]
    fn test_secrecy_structural() {
        let text = "Employee shall not disclose the terms of this offer.";
        assert_eq!(
            best_rule(ClauseType::Confidentiality, text),
            Some(("confidentiality.secrecy_obligation", RiskLevel::Medium))
        );
    }
}
