//! Arbitration and dispute resolution clauses

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{DISPUTE_KEYWORDS, FINALITY_KEYWORDS, FORUM_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::Arbitration,
    rules: &[
        RuleSpec {
            id: "arbitration.binding",
            pattern: PatternSpec::Phrase(
                r"\b(?:binding|mandatory|compulsory)\s+(?:individual\s+)?arbitration\b",
            ),
            base_risk: RiskLevel::High,
            label: "binding arbitration",
        },
        RuleSpec {
            id: "arbitration.class_action_waiver",
            pattern: PatternSpec::Phrase(
                r"\bclass[\s-]+action\s+waiver\b|\bwaive\w*\s+(?:any\s+|your\s+)?(?:right\s+to\s+)?(?:a\s+)?(?:jury\s+trial|class\s+action|trial\s+by\s+jury)",
            ),
            base_risk: RiskLevel::High,
            label: "waiver of jury trial or class action",
        },
        RuleSpec {
            id: "arbitration.alternative_dispute_resolution",
            pattern: PatternSpec::Phrase(r"\balternative\s+dispute\s+resolution\b"),
            base_risk: RiskLevel::Medium,
            label: "alternative dispute resolution",
        },
        RuleSpec {
            id: "arbitration.dispute_resolution",
            pattern: PatternSpec::Phrase(r"\bdispute\s+resolution\b"),
            base_risk: RiskLevel::Medium,
            label: "dispute resolution procedure",
        },
        RuleSpec {
            id: "arbitration.arbitration",
            pattern: PatternSpec::Keyword(r"\barbitrat(?:ion|ors?|e|ed)\b"),
            base_risk: RiskLevel::Medium,
            label: "arbitration",
        },
        RuleSpec {
            id: "arbitration.mediation",
            pattern: PatternSpec::Keyword(r"\bmediat(?:ion|or)\b"),
            base_risk: RiskLevel::Low,
            label: "mediation",
        },
        RuleSpec {
            id: "arbitration.exclusive_forum",
            pattern: PatternSpec::CoOccurrence(&[
                DISPUTE_KEYWORDS,
                FORUM_KEYWORDS,
                FINALITY_KEYWORDS,
            ]),
            base_risk: RiskLevel::Medium,
            label: "disputes routed to a final private forum",
        },
    ],
    escalators: &[
        r"\bmandatory\s+arbitration\b",
        r"\bno\s+jury\s+trial\b",
        r"\bwaive\w*\b.{0,40}\bjury\b",
        r"\bclass[\s-]+action\b",
        r"\bfinal\s+and\s+binding\b",
    ],
    mitigators: &[
        r"\b(?:optional|voluntary)\s+arbitration\b",
        r"\bmay\s+elect\b",
        r"\bopt[\s-]?out\b",
        r"\bright\s+to\s+sue\b",
        r"\bsmall\s+claims\s+court\b",
        r"\bmediation\s+first\b",
    ],
    explanations: Explanations {
        high: "This arbitration clause may limit your legal rights. Consider consulting a lawyer.",
        medium: "This arbitration clause provides alternative dispute resolution. Understand the process.",
        low: "This arbitration clause offers a reasonable dispute resolution mechanism.",
    },
};
