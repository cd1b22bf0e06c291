use shared_types::{ClauseType, ParseClauseTypeError, RiskLevel};
use thiserror::Error;

/// Errors raised by the clause engine
///
/// Validation errors describe bad caller input. Configuration errors describe
/// incomplete rule or weight tables and surface when the engine is built.
/// Every failure is deterministic for a given input.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Document is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Invalid clause at position {index}: {reason}")]
    InvalidClause { index: usize, reason: String },

    #[error("Unknown clause type: {0}")]
    UnknownClauseType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No detection rules registered for clause type {0}")]
    MissingRules(ClauseType),

    #[error("No weight configured for {clause_type} clauses at {risk_level} risk")]
    MissingWeight {
        clause_type: ClauseType,
        risk_level: RiskLevel,
    },

    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ParseClauseTypeError> for EngineError {
    fn from(err: ParseClauseTypeError) -> Self {
        EngineError::UnknownClauseType(err.0)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
