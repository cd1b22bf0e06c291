//! Detection rule registry
//!
//! Each clause type is described by a static [`ClauseSignature`]: its
//! detection rules, the indicators that raise or lower a match's risk, and the
//! explanation shown per risk level. Signatures are plain data; the
//! [`RuleRegistryBuilder`] compiles them once and refuses to produce a
//! registry with a clause type that has no rules.

pub mod arbitration;
pub mod auto_renewal;
pub mod cancellation;
pub mod confidentiality;
pub mod data_sharing;
pub mod liability;
pub mod termination;

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use shared_types::{ClauseType, RiskLevel};
use tracing::warn;

use crate::error::{EngineError, Result};
use crate::patterns::contains_all_groups;

/// Version tag of the built-in rule tables
pub const BUILTIN_RULES_VERSION: &str = "2024.1";

/// How precisely a rule pins down a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Specificity {
    /// Co-occurrence of keyword groups in one sentence
    Structural,
    /// A single term
    Keyword,
    /// A multi-word phrase
    Phrase,
}

/// Uncompiled rule pattern
#[derive(Debug, Clone, Copy)]
pub enum PatternSpec {
    /// Case-insensitive regex describing a multi-word phrase
    Phrase(&'static str),
    /// Case-insensitive regex describing one term
    Keyword(&'static str),
    /// Every group must contribute a lowercase substring hit in the same window
    CoOccurrence(&'static [&'static [&'static str]]),
}

/// One detection rule as written in a signature table
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub id: &'static str,
    pub pattern: PatternSpec,
    pub base_risk: RiskLevel,
    /// Short description of what the rule found, used in explanations
    pub label: &'static str,
}

/// Plain-English explanation per risk level
#[derive(Debug, Clone, Copy)]
pub struct Explanations {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

impl Explanations {
    pub fn for_level(&self, level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// Everything the engine knows about one clause type
#[derive(Debug, Clone, Copy)]
pub struct ClauseSignature {
    pub clause_type: ClauseType,
    pub rules: &'static [RuleSpec],
    /// Regexes that raise a match to high risk
    pub escalators: &'static [&'static str],
    /// Regexes that lower a match one level when no escalator is present
    pub mitigators: &'static [&'static str],
    pub explanations: Explanations,
}

/// The built-in signatures, in clause type declaration order
pub fn builtin_signatures() -> [&'static ClauseSignature; 7] {
    [
        &data_sharing::SIGNATURE,
        &auto_renewal::SIGNATURE,
        &arbitration::SIGNATURE,
        &liability::SIGNATURE,
        &cancellation::SIGNATURE,
        &confidentiality::SIGNATURE,
        &termination::SIGNATURE,
    ]
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    CoOccurrence(&'static [&'static [&'static str]]),
}

/// A compiled detection rule
#[derive(Debug, Clone)]
pub struct DetectionRule {
    pub id: &'static str,
    pub clause_type: ClauseType,
    pub specificity: Specificity,
    pub base_risk: RiskLevel,
    pub label: &'static str,
    matcher: Matcher,
}

impl DetectionRule {
    fn compile(clause_type: ClauseType, spec: &RuleSpec) -> Result<Self> {
        let (specificity, matcher) = match spec.pattern {
            PatternSpec::Phrase(p) => (Specificity::Phrase, Matcher::Regex(compile(spec.id, p)?)),
            PatternSpec::Keyword(p) => (Specificity::Keyword, Matcher::Regex(compile(spec.id, p)?)),
            PatternSpec::CoOccurrence(groups) => {
                if groups.is_empty() || groups.iter().any(|g| g.is_empty()) {
                    return Err(EngineError::InvalidConfig(format!(
                        "rule '{}' has an empty keyword group",
                        spec.id
                    )));
                }
                (Specificity::Structural, Matcher::CoOccurrence(groups))
            }
        };

        Ok(Self {
            id: spec.id,
            clause_type,
            specificity,
            base_risk: spec.base_risk,
            label: spec.label,
            matcher,
        })
    }

    /// Test the rule against one sentence window
    ///
    /// `text_lower` must be `text.to_lowercase()`; it is passed in so a window
    /// is lowercased once for all rules.
    pub fn matches(&self, text: &str, text_lower: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(text),
            Matcher::CoOccurrence(groups) => contains_all_groups(text_lower, groups),
        }
    }
}

fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| {
            warn!(rule, "rejecting rule with invalid pattern");
            EngineError::InvalidPattern {
                rule: rule.to_string(),
                source,
            }
        })
}

/// Compiled form of a [`ClauseSignature`]
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub clause_type: ClauseType,
    pub rules: Vec<DetectionRule>,
    escalators: Vec<Regex>,
    mitigators: Vec<Regex>,
    explanations: Explanations,
}

impl CompiledSignature {
    /// Adjust a rule's base risk using the indicators found in the window
    pub fn assess_risk(&self, base: RiskLevel, text: &str) -> RiskLevel {
        if self.escalators.iter().any(|re| re.is_match(text)) {
            RiskLevel::High
        } else if self.mitigators.iter().any(|re| re.is_match(text)) {
            base.lowered()
        } else {
            base
        }
    }

    pub fn explanation(&self, level: RiskLevel) -> &'static str {
        self.explanations.for_level(level)
    }
}

/// Read-only, validated set of compiled signatures
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    version: String,
    signatures: BTreeMap<ClauseType, CompiledSignature>,
}

impl RuleRegistry {
    /// Registry compiled from the built-in signature tables
    pub fn builtin() -> Result<Self> {
        builtin_signatures()
            .into_iter()
            .fold(Self::builder(), |b, sig| b.signature(sig))
            .version(BUILTIN_RULES_VERSION)
            .build()
    }

    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Signatures in clause type declaration order
    pub fn signatures(&self) -> impl Iterator<Item = &CompiledSignature> {
        self.signatures.values()
    }

    pub fn signature(&self, clause_type: ClauseType) -> Option<&CompiledSignature> {
        self.signatures.get(&clause_type)
    }

    pub fn rules_for(&self, clause_type: ClauseType) -> &[DetectionRule] {
        self.signatures
            .get(&clause_type)
            .map(|s| s.rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn rule_count(&self) -> usize {
        self.signatures.values().map(|s| s.rules.len()).sum()
    }
}

/// Collects signatures and compiles them into a [`RuleRegistry`]
#[derive(Debug, Default)]
pub struct RuleRegistryBuilder {
    version: Option<String>,
    signatures: Vec<ClauseSignature>,
}

impl RuleRegistryBuilder {
    /// Add a signature; a later signature for the same type replaces the earlier one
    pub fn signature(mut self, signature: &ClauseSignature) -> Self {
        self.signatures.retain(|s| s.clause_type != signature.clause_type);
        self.signatures.push(*signature);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Compile every pattern and check that each clause type has rules
    pub fn build(self) -> Result<RuleRegistry> {
        let mut signatures = BTreeMap::new();

        for sig in &self.signatures {
            let rules = sig
                .rules
                .iter()
                .map(|spec| DetectionRule::compile(sig.clause_type, spec))
                .collect::<Result<Vec<_>>>()?;
            let escalators = compile_all(sig.clause_type, "escalator", sig.escalators)?;
            let mitigators = compile_all(sig.clause_type, "mitigator", sig.mitigators)?;

            signatures.insert(
                sig.clause_type,
                CompiledSignature {
                    clause_type: sig.clause_type,
                    rules,
                    escalators,
                    mitigators,
                    explanations: sig.explanations,
                },
            );
        }

        for clause_type in ClauseType::ALL {
            let has_rules = signatures
                .get(&clause_type)
                .is_some_and(|s| !s.rules.is_empty());
            if !has_rules {
                return Err(EngineError::MissingRules(clause_type));
            }
        }

        Ok(RuleRegistry {
            version: self.version.unwrap_or_else(|| "custom".to_string()),
            signatures,
        })
    }
}

fn compile_all(clause_type: ClauseType, kind: &str, patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| compile(&format!("{}/{}#{}", clause_type, kind, i), p))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_RULES: ClauseSignature = ClauseSignature {
        clause_type: ClauseType::Termination,
        rules: &[],
        escalators: &[],
        mitigators: &[],
        explanations: Explanations {
            high: "",
            medium: "",
            low: "",
        },
    };

    const BAD_PATTERN: ClauseSignature = ClauseSignature {
        clause_type: ClauseType::Liability,
        rules: &[RuleSpec {
            id: "liability.broken",
            pattern: PatternSpec::Phrase(r"(unclosed"),
            base_risk: RiskLevel::Low,
            label: "broken",
        }],
        escalators: &[],
        mitigators: &[],
        explanations: Explanations {
            high: "",
            medium: "",
            low: "",
        },
    };

    #[test]
    fn test_builtin_registry_covers_every_type() {
        let registry = RuleRegistry::builtin().unwrap();
        assert_eq!(registry.version(), BUILTIN_RULES_VERSION);
        for ty in ClauseType::ALL {
            assert!(!registry.rules_for(ty).is_empty(), "{} has no rules", ty);
        }
        let order: Vec<_> = registry.signatures().map(|s| s.clause_type).collect();
        assert_eq!(order, ClauseType::ALL.to_vec());
    }

    #[test]
    fn test_builtin_rule_ids_are_unique_and_typed() {
        let registry = RuleRegistry::builtin().unwrap();
        let mut ids = std::collections::HashSet::new();
        for sig in registry.signatures() {
            for rule in &sig.rules {
                assert!(ids.insert(rule.id), "duplicate rule id {}", rule.id);
                assert!(rule.id.starts_with(sig.clause_type.as_str()));
                assert_eq!(rule.clause_type, sig.clause_type);
            }
        }
        assert_eq!(ids.len(), registry.rule_count());
    }

    #[test]
    fn test_missing_type_fails_fast() {
        let result = builtin_signatures()
            .into_iter()
            .filter(|s| s.clause_type != ClauseType::Arbitration)
            .fold(RuleRegistry::builder(), |b, s| b.signature(s))
            .build();
        assert!(matches!(
            result,
            Err(EngineError::MissingRules(ClauseType::Arbitration))
        ));
    }

    #[test]
    fn test_signature_without_rules_fails_fast() {
        let result = builtin_signatures()
            .into_iter()
            .fold(RuleRegistry::builder(), |b, s| b.signature(s))
            .signature(&EMPTY_RULES)
            .build();
        assert!(matches!(
            result,
            Err(EngineError::MissingRules(ClauseType::Termination))
        ));
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_rule_id() {
        let result = RuleRegistry::builder().signature(&BAD_PATTERN).build();
        match result {
            Err(EngineError::InvalidPattern { rule, .. }) => assert_eq!(rule, "liability.broken"),
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_assess_risk_escalates_and_mitigates() {
        let registry = RuleRegistry::builtin().unwrap();
        let sig = registry.signature(ClauseType::Termination).unwrap();

        assert_eq!(
            sig.assess_risk(RiskLevel::Low, "We may terminate your account without notice."),
            RiskLevel::High
        );
        assert_eq!(
            sig.assess_risk(
                RiskLevel::Medium,
                "Either party may terminate upon 30 days written notice."
            ),
            RiskLevel::Low
        );
        assert_eq!(
            sig.assess_risk(RiskLevel::Medium, "This agreement terminates."),
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_rule_matching_is_case_insensitive() {
        let registry = RuleRegistry::builtin().unwrap();
        let text = "DISPUTES SHALL BE RESOLVED BY BINDING ARBITRATION.";
        let lower = text.to_lowercase();
        assert!(registry
            .rules_for(ClauseType::Arbitration)
            .iter()
            .any(|r| r.specificity == Specificity::Phrase && r.matches(text, &lower)));
    }

    #[test]
    fn test_specificity_order() {
        assert!(Specificity::Phrase > Specificity::Keyword);
        assert!(Specificity::Keyword > Specificity::Structural);
    }
}
