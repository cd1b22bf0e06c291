//! Auto-renewal clauses
//!
//! Terms that extend the agreement without an affirmative act by the customer.

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{CONDITION_KEYWORDS, EXIT_KEYWORDS, RENEWAL_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::AutoRenewal,
    rules: &[
        RuleSpec {
            id: "auto_renewal.automatically_renews",
            pattern: PatternSpec::Phrase(
                r"\bautomatic(?:ally)?\s+(?:be\s+)?renew(?:s|ed|al|ing)?\b",
            ),
            base_risk: RiskLevel::Medium,
            label: "automatic renewal",
        },
        RuleSpec {
            id: "auto_renewal.auto_renew",
            pattern: PatternSpec::Phrase(r"\bauto[\s-]?renew(?:s|ed|al|ing)?\b"),
            base_risk: RiskLevel::Medium,
            label: "auto-renew provision",
        },
        RuleSpec {
            id: "auto_renewal.evergreen",
            pattern: PatternSpec::Phrase(r"\bevergreen\s+(?:clause|term|provision|contract)\b"),
            base_risk: RiskLevel::Medium,
            label: "evergreen term",
        },
        RuleSpec {
            id: "auto_renewal.perpetual_renewal",
            pattern: PatternSpec::Phrase(r"\b(?:continuous|perpetual|indefinite)\s+renewals?\b"),
            base_risk: RiskLevel::High,
            label: "open-ended renewal",
        },
        RuleSpec {
            id: "auto_renewal.successive_terms",
            pattern: PatternSpec::Phrase(
                r"\brenew(?:s|ed)?\s+for\s+(?:successive|additional|consecutive|subsequent)\b",
            ),
            base_risk: RiskLevel::Medium,
            label: "renewal for successive terms",
        },
        RuleSpec {
            id: "auto_renewal.renewal_term",
            pattern: PatternSpec::Keyword(r"\brenewal\s+(?:term|period)s?\b"),
            base_risk: RiskLevel::Low,
            label: "renewal term",
        },
        RuleSpec {
            id: "auto_renewal.renewal_unless_cancelled",
            pattern: PatternSpec::CoOccurrence(&[
                RENEWAL_KEYWORDS,
                CONDITION_KEYWORDS,
                EXIT_KEYWORDS,
            ]),
            base_risk: RiskLevel::Medium,
            label: "renewal that continues unless stopped",
        },
    ],
    escalators: &[
        r"\bno\s+(?:prior\s+)?notice\b",
        r"\bwithout\s+(?:prior\s+|further\s+)?notice\b",
        r"\bperpetual(?:ly)?\b",
        r"\birrevocabl[ey]\b",
        r"\bnon[\s-]?refundable\b",
        r"\b(?:60|90|120|180|sixty|ninety)\s*(?:\(\d+\)\s*)?days?'?\s+(?:in\s+advance|prior|before)\b",
    ],
    mitigators: &[
        r"\bopt[\s-]?out\b",
        r"\bcancel\s+(?:at\s+)?any\s*time\b",
        r"\breminder\b",
        r"\bwritten\s+notice\b",
    ],
    explanations: Explanations {
        high: "This auto-renewal clause may lock you into long-term commitments. Check cancellation terms carefully.",
        medium: "This auto-renewal clause has some notice requirements. Understand your cancellation rights.",
        low: "This auto-renewal clause provides reasonable notice and cancellation options.",
    },
};
