//! Keyword groups and matching helpers shared by the rule tables

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Terms that mark a sentence as describing the agreement itself
pub const SUMMARY_KEY_TERMS: &[&str] = &[
    "agreement",
    "contract",
    "terms",
    "conditions",
    "obligations",
    "rights",
];

/// Personal data references
pub const DATA_KEYWORDS: &[&str] = &["data", "information", "records", "content"];

/// Recipients outside the contracting parties
pub const THIRD_PARTY_KEYWORDS: &[&str] = &[
    "third part",
    "third-part",
    "affiliate",
    "partner",
    "advertiser",
    "vendor",
];

/// Verbs that move data to someone else
pub const DISCLOSURE_KEYWORDS: &[&str] = &[
    "share", "sell", "disclose", "transfer", "provide", "sold",
];

/// Renewal references
pub const RENEWAL_KEYWORDS: &[&str] = &["renew", "extend", "roll over", "rollover"];

/// Conditions under which something continues or stops
pub const CONDITION_KEYWORDS: &[&str] = &["unless", "until", "except"];

/// Ways of stopping an agreement
pub const EXIT_KEYWORDS: &[&str] = &["cancel", "terminat", "notice", "opt out", "opt-out"];

/// Dispute references
pub const DISPUTE_KEYWORDS: &[&str] = &["dispute", "claim", "controversy"];

/// Forums that replace a court
pub const FORUM_KEYWORDS: &[&str] = &["arbitrat", "mediat", "tribunal", "arbiter"];

/// Finality qualifiers
pub const FINALITY_KEYWORDS: &[&str] = &["final", "binding", "exclusive", "sole"];

/// Responsibility references
pub const RESPONSIBILITY_KEYWORDS: &[&str] = &["liable", "liability", "responsible"];

/// Negation or exclusion markers
pub const EXCLUSION_KEYWORDS: &[&str] = &["not ", "no ", "exclud", "disclaim", "except"];

/// Harm references
pub const HARM_KEYWORDS: &[&str] = &["damage", "loss", "injur", "harm"];

/// Cancellation references
pub const CANCEL_KEYWORDS: &[&str] = &["cancel"];

/// Money owed on exit
pub const PENALTY_KEYWORDS: &[&str] = &["fee", "charge", "penalt", "forfeit"];

/// Secrecy obligations
pub const SECRECY_KEYWORDS: &[&str] = &[
    "not disclose",
    "not reveal",
    "keep secret",
    "in confidence",
    "secrecy",
];

/// Subject matter of a secrecy obligation
pub const MATERIAL_KEYWORDS: &[&str] = &["information", "terms", "material", "know-how"];

/// Termination references
pub const TERMINATION_KEYWORDS: &[&str] = &["terminat", "suspend", "end your"];

/// Unilateral exit conditions
pub const UNILATERAL_KEYWORDS: &[&str] = &[
    "without notice",
    "without prior notice",
    "without cause",
    "sole discretion",
    "for any reason",
];

lazy_static! {
    /// Abbreviations that never end a sentence
    pub static ref ABBREVIATIONS: HashSet<&'static str> = [
        "dr", "mr", "mrs", "ms", "prof",
        "inc", "e.g", "i.e", "vs", "approx",
    ]
    .into_iter()
    .collect();

    /// Abbreviations that also close sentences ("etc.") or collide with
    /// ordinary words ("art.", "co.")
    pub static ref AMBIGUOUS_ABBREVIATIONS: HashSet<&'static str> = [
        "sr", "jr", "ltd", "corp", "co", "llc", "l.l.c", "etc",
        "u.s", "u.k", "p.m", "a.m",
        "st", "ave", "dept", "sec", "art", "para",
    ]
    .into_iter()
    .collect();
}

/// How a dotted token treats the period that ends it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationKind {
    /// The period never ends a sentence
    Fixed,
    /// The period ends a sentence unless lowercase text or a digit follows
    Ambiguous,
}

/// True if any keyword occurs in `text_lower`
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

/// True if every keyword group contributes at least one hit
///
/// Expects lowercase input. An empty group list never matches.
pub fn contains_all_groups(text_lower: &str, keyword_groups: &[&[&str]]) -> bool {
    !keyword_groups.is_empty()
        && keyword_groups
            .iter()
            .all(|group| contains_any(text_lower, group))
}

/// Classify a dotted token as an abbreviation, if it is one
///
/// Single letters are initials ("J. Smith") and count as ambiguous, since a
/// sentence may just as well end on one.
pub fn abbreviation_kind(token: &str) -> Option<AbbreviationKind> {
    let token = token
        .trim_start_matches(|c: char| matches!(c, '(' | '"' | '\'' | '[' | '“' | '‘'))
        .trim_end_matches('.');
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return None,
        (Some(c), None) => return c.is_alphabetic().then_some(AbbreviationKind::Ambiguous),
        _ => {}
    }

    let lower = token.to_lowercase();
    if ABBREVIATIONS.contains(lower.as_str()) {
        Some(AbbreviationKind::Fixed)
    } else if AMBIGUOUS_ABBREVIATIONS.contains(lower.as_str()) {
        Some(AbbreviationKind::Ambiguous)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_all_groups() {
        let text = "we may share your data with our partners";
        assert!(contains_all_groups(
            text,
            &[DISCLOSURE_KEYWORDS, DATA_KEYWORDS, THIRD_PARTY_KEYWORDS]
        ));
        assert!(!contains_all_groups(
            "we keep your data private",
            &[DISCLOSURE_KEYWORDS, DATA_KEYWORDS, THIRD_PARTY_KEYWORDS]
        ));
        assert!(!contains_all_groups(text, &[]));
    }

    #[test]
    fn test_abbreviation_kind() {
        assert_eq!(abbreviation_kind("Inc."), Some(AbbreviationKind::Fixed));
        assert_eq!(abbreviation_kind("e.g."), Some(AbbreviationKind::Fixed));
        assert_eq!(abbreviation_kind("U.S."), Some(AbbreviationKind::Ambiguous));
        assert_eq!(abbreviation_kind("etc."), Some(AbbreviationKind::Ambiguous));
        assert_eq!(abbreviation_kind("art."), Some(AbbreviationKind::Ambiguous));
        assert_eq!(abbreviation_kind("(J."), Some(AbbreviationKind::Ambiguous));
        assert_eq!(abbreviation_kind("parties."), None);
        assert_eq!(abbreviation_kind("."), None);
        assert_eq!(abbreviation_kind("5."), None);
    }
}
