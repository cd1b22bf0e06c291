pub mod types;

pub use types::{
    ClauseMatch, ClauseType, DocumentAnalysis, ParseClauseTypeError, RiskLevel, RiskReport,
    RiskSummary, TextPosition,
};
