//! Cancellation clauses
//!
//! Fees, penalties and refund terms that apply when the customer walks away.

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{CANCEL_KEYWORDS, PENALTY_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::Cancellation,
    rules: &[
        RuleSpec {
            id: "cancellation.early_termination_fee",
            pattern: PatternSpec::Phrase(
                r"\bearly\s+(?:termination|cancellation)\s+(?:fee|charge|penalty)s?\b",
            ),
            base_risk: RiskLevel::High,
            label: "early termination fee",
        },
        RuleSpec {
            id: "cancellation.cancellation_fee",
            pattern: PatternSpec::Phrase(r"\bcancell?ation\s+(?:fee|charge|penalty|policy)s?\b"),
            base_risk: RiskLevel::Medium,
            label: "cancellation fee or policy",
        },
        RuleSpec {
            id: "cancellation.non_refundable",
            pattern: PatternSpec::Phrase(r"\bnon[\s-]?refundable\b|\bno\s+refunds?\b"),
            base_risk: RiskLevel::Medium,
            label: "no refunds",
        },
        RuleSpec {
            id: "cancellation.breach",
            pattern: PatternSpec::Phrase(
                r"\bbreach\s+of\s+(?:this\s+)?(?:contract|agreement)\b|\bdefault\s+provisions?\b",
            ),
            base_risk: RiskLevel::Low,
            label: "breach and default terms",
        },
        RuleSpec {
            id: "cancellation.cancel",
            pattern: PatternSpec::Keyword(r"\bcancel(?:s|led|ed|ling|ing|lation)?\b"),
            base_risk: RiskLevel::Low,
            label: "cancellation",
        },
        RuleSpec {
            id: "cancellation.refund",
            pattern: PatternSpec::Keyword(r"\brefund(?:s|ed|able)?\b"),
            base_risk: RiskLevel::Low,
            label: "refund terms",
        },
        RuleSpec {
            id: "cancellation.cancel_with_penalty",
            pattern: PatternSpec::CoOccurrence(&[CANCEL_KEYWORDS, PENALTY_KEYWORDS]),
            base_risk: RiskLevel::Medium,
            label: "cancellation with a charge",
        },
    ],
    escalators: &[
        r"\bno\s+refunds?\b",
        r"\bforfeit",
        r"\bnon[\s-]?refundable\b",
        r"\bremaining\s+(?:balance|term|payments|fees)\b",
        r"\bliquidated\s+damages\b",
    ],
    mitigators: &[
        r"\bcancel\s+(?:at\s+)?any\s*time\b",
        r"\bfull\s+refund\b",
        r"\bwithout\s+(?:any\s+)?(?:penalty|charge|fee)\b",
        r"\bpro[\s-]?rat(?:a|ed)\b",
    ],
    explanations: Explanations {
        high: "This cancellation clause imposes significant costs for leaving the agreement. Review the fees before signing.",
        medium: "This cancellation clause sets conditions or charges for cancelling. Make sure you can meet them.",
        low: "This cancellation clause provides reasonable cancellation options.",
    },
};
