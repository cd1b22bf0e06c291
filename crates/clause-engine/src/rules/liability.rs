//! Liability limitation and indemnification clauses

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{EXCLUSION_KEYWORDS, HARM_KEYWORDS, RESPONSIBILITY_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::Liability,
    rules: &[
        RuleSpec {
            id: "liability.limitation_of_liability",
            pattern: PatternSpec::Phrase(
                r"\blimitation\s+of\s+liability\b|\bliability\s+(?:is|shall\s+be)\s+limited\b",
            ),
            base_risk: RiskLevel::Medium,
            label: "limitation of liability",
        },
        RuleSpec {
            id: "liability.hold_harmless",
            pattern: PatternSpec::Phrase(r"\bhold\s+(?:\w+\s+){0,6}harmless\b"),
            base_risk: RiskLevel::High,
            label: "hold harmless obligation",
        },
        RuleSpec {
            id: "liability.not_liable",
            pattern: PatternSpec::Phrase(
                r"\b(?:shall|will)\s+not\s+be\s+(?:held\s+)?(?:liable|responsible)\b|\bin\s+no\s+event\s+shall\b",
            ),
            base_risk: RiskLevel::Medium,
            label: "exclusion of liability",
        },
        RuleSpec {
            id: "liability.damages_waiver",
            pattern: PatternSpec::Phrase(
                r"\bwaive\w*\s+(?:all\s+|any\s+)?(?:claims|damages)\b|\bwaiver\s+of\s+damages\b",
            ),
            base_risk: RiskLevel::High,
            label: "waiver of damages",
        },
        RuleSpec {
            id: "liability.indemnify",
            pattern: PatternSpec::Keyword(r"\bindemnif(?:y|ies|ied|ication)\b"),
            base_risk: RiskLevel::Medium,
            label: "indemnification",
        },
        RuleSpec {
            id: "liability.liability",
            pattern: PatternSpec::Keyword(r"\bliabilit(?:y|ies)\b"),
            base_risk: RiskLevel::Low,
            label: "liability",
        },
        RuleSpec {
            id: "liability.disclaimer",
            pattern: PatternSpec::Keyword(r"\bdisclaim(?:s|ed|er|ers)?\b"),
            base_risk: RiskLevel::Low,
            label: "disclaimer",
        },
        RuleSpec {
            id: "liability.excluded_damages",
            pattern: PatternSpec::CoOccurrence(&[
                RESPONSIBILITY_KEYWORDS,
                EXCLUSION_KEYWORDS,
                HARM_KEYWORDS,
            ]),
            base_risk: RiskLevel::Medium,
            label: "responsibility for harm excluded",
        },
    ],
    escalators: &[
        r"\bunlimited\s+liability\b",
        r"\bsole\s+risk\b",
        r"\b(?:regardless|irrespective)\s+of\s+(?:fault|negligence|cause)\b",
        r"\bany\s+and\s+all\s+(?:claims|damages|losses|liabilit)",
    ],
    mitigators: &[
        r"\bmutual(?:ly)?\b",
        r"\breasonable\b",
        r"\bexcept\s+(?:in\s+(?:cases|the\s+case)\s+of|for)\s+(?:gross\s+negligence|willful|wilful|fraud)",
    ],
    explanations: Explanations {
        high: "This liability clause significantly limits your rights to damages. Review carefully.",
        medium: "This liability clause has some limitations but provides reasonable protection.",
        low: "This liability clause provides fair and reasonable terms.",
    },
};

#[cfg(test)]
mod tests {
    use super::super::test_support::best_rule;
    use shared_types::{ClauseType, RiskLevel};

    #[test]
    fn test_hold_harmless_is_high() {
        let text = "You agree to hold the Company and its officers harmless.";
        assert_eq!(
            best_rule(ClauseType::Liability, text),
            Some(("liability.hold_harmless", RiskLevel::High))
        );
    }

    #[test]
    fn test_any_and_all_escalates_exclusion() {
        let text = "We shall not be liable for any and all damages arising from use.";
        assert_eq!(
            best_rule(ClauseType::Liability, text),
            Some(("liability.not_liable", RiskLevel::High))
        );
    }

    #[test]
    fn test_carve_out_lowers_risk() {
        let text = "Limitation of liability applies except for gross negligence.";
        assert_eq!(
            best_rule(ClauseType::Liability, text),
            Some(("liability.limitation_of_liability", RiskLevel::Low))
        );
    }

    #[test]
    fn test_indemnification_keyword() {
        let text = "Customer shall indemnify the Provider.";
        assert_eq!(
            best_rule(ClauseType::Liability, text),
            Some(("liability.indemnify", RiskLevel::Medium))
        );
    }
}
