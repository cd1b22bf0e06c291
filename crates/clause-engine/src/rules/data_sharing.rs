//! Data sharing clauses
//!
//! Provisions that let the other party pass personal data to third parties.

use shared_types::{ClauseType, RiskLevel};

use super::{ClauseSignature, Explanations, PatternSpec, RuleSpec};
use crate::patterns::{DATA_KEYWORDS, DISCLOSURE_KEYWORDS, THIRD_PARTY_KEYWORDS};

pub const SIGNATURE: ClauseSignature = ClauseSignature {
    clause_type: ClauseType::DataSharing,
    rules: &[
        RuleSpec {
            id: "data_sharing.share_with_third_parties",
            pattern: PatternSpec::Phrase(
                r"\b(?:share|sell|disclose|transfer|provide|rent)s?\s+(?:your\s+|all\s+|such\s+|any\s+|user\s+|customer\s+)?(?:personal\s+)?(?:data|information)\s+(?:with|to)\s+(?:our\s+)?(?:third[\s-]+part(?:y|ies)|affiliates|partners|advertisers)",
            ),
            base_risk: RiskLevel::High,
            label: "personal data passed to third parties",
        },
        RuleSpec {
            id: "data_sharing.data_is_shared",
            pattern: PatternSpec::Phrase(
                r"\b(?:data|information)\s+(?:is|are|will\s+be|may\s+be)\s+(?:shared|sold|disclosed|transferred)\s+(?:with|to)\b",
            ),
            base_risk: RiskLevel::High,
            label: "data disclosed to other parties",
        },
        RuleSpec {
            id: "data_sharing.third_party_access",
            pattern: PatternSpec::Phrase(r"\bthird[\s-]+part(?:y|ies)\s+access\b"),
            base_risk: RiskLevel::Medium,
            label: "third-party access to data",
        },
        RuleSpec {
            id: "data_sharing.data_transfer",
            pattern: PatternSpec::Phrase(
                r"\b(?:data|information)\s+(?:sharing|transfers?|disclosures?)\b",
            ),
            base_risk: RiskLevel::Medium,
            label: "data transfer provision",
        },
        RuleSpec {
            id: "data_sharing.personal_information",
            pattern: PatternSpec::Keyword(
                r"\bpersonal(?:ly)?[\s-]+(?:identifiable\s+)?(?:data|information)\b",
            ),
            base_risk: RiskLevel::Low,
            label: "reference to personal information",
        },
        RuleSpec {
            id: "data_sharing.privacy_policy",
            pattern: PatternSpec::Keyword(r"\bprivacy\s+policy\b"),
            base_risk: RiskLevel::Low,
            label: "reference to a privacy policy",
        },
        RuleSpec {
            id: "data_sharing.disclosure_cluster",
            pattern: PatternSpec::CoOccurrence(&[
                DISCLOSURE_KEYWORDS,
                DATA_KEYWORDS,
                THIRD_PARTY_KEYWORDS,
            ]),
            base_risk: RiskLevel::Medium,
            label: "data and third parties mentioned together",
        },
    ],
    escalators: &[
        r"\bmarketing\b",
        r"\badvertis(?:ing|ers?)\b",
        r"\b(?:sell|sold|sale\s+of)\b",
        r"\bunlimited\s+access\b",
        r"\bpermanent(?:ly)?\s+(?:retain|retention|store)",
        r"\b(?:without|no)\s+(?:your\s+)?(?:prior\s+)?consent\b",
    ],
    mitigators: &[
        r"\bwith\s+your\s+(?:prior\s+)?(?:express\s+|explicit\s+|written\s+)?consent\b",
        r"\banonymi[sz]ed\b",
        r"\baggregated?\b",
        r"\blimited\s+access\b",
        r"\bsecure(?:ly)?\s+stor",
        r"\bopt[\s-]?out\b",
    ],
    explanations: Explanations {
        high: "This clause allows extensive data sharing with third parties. Review carefully as it may compromise your privacy.",
        medium: "This clause permits data sharing under certain conditions. Ensure you understand the scope and limitations.",
        low: "This clause has reasonable data sharing provisions with appropriate safeguards.",
    },
};
