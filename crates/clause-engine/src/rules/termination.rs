//! Termination clauses
//!
//! Who may end the agreement, when, and with how much warning.

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{TERMINATION_KEYWORDS, UNILATERAL_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::Termination,
    rules: &[
        RuleSpec {
            id: "termination.at_will",
            pattern: PatternSpec::Phrase(
                r"\bterminat\w*\s+(?:this\s+agreement\s+|the\s+agreement\s+|your\s+(?:account|access|subscription|service)\s+)?(?:at\s+any\s+time|immediately|for\s+any\s+reason|without\s+(?:prior\s+)?(?:notice|cause))",
            ),
            base_risk: RiskLevel::High,
            label: "termination at will",
        },
        RuleSpec {
            id: "termination.notice_of_termination",
            pattern: PatternSpec::Phrase(r"\b(?:notice|right)\s+of\s+termination\b"),
            base_risk: RiskLevel::Medium,
            label: "termination notice",
        },
        RuleSpec {
            id: "termination.end_of_agreement",
            pattern: PatternSpec::Phrase(
                r"\bend\s+of\s+(?:the\s+|this\s+)?agreement\b|\bcontract\s+expiration\b|\bexpiration\s+of\s+(?:this|the)\s+(?:agreement|contract|term)\b",
            ),
            base_risk: RiskLevel::Low,
            label: "end of the agreement",
        },
        RuleSpec {
            id: "termination.terminate",
            pattern: PatternSpec::Keyword(r"\bterminat(?:e|es|ed|ing|ion)\b"),
            base_risk: RiskLevel::Low,
            label: "termination",
        },
        RuleSpec {
            id: "termination.unilateral",
            pattern: PatternSpec::CoOccurrence(&[TERMINATION_KEYWORDS, UNILATERAL_KEYWORDS]),
            base_risk: RiskLevel::High,
            label: "unilateral termination without notice",
        },
    ],
    escalators: &[
        r"\bsole\s+discretion\b",
        r"\bwithout\s+(?:prior\s+)?(?:notice|cause)\b",
        r"\bfor\s+any\s+reason\b",
        r"\bimmediately\b",
    ],
    mitigators: &[
        r"\bfor\s+cause\b",
        r"\b(?:30|thirty|60|sixty|90|ninety)\s+days?'?\s+(?:prior\s+)?(?:written\s+)?notice\b",
        r"\bmaterial\s+breach\b",
        r"\bcure\s+period\b|\bopportunity\s+to\s+cure\b",
    ],
    explanations: Explanations {
        high: "This termination clause lets the agreement be ended abruptly or unilaterally. Plan for losing access without warning.",
        medium: "This termination clause sets conditions for ending the agreement. Note the notice you must give or receive.",
        low: "This termination clause provides fair notice and exit terms.",
    },
};
