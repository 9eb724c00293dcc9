//! Analysis report schema and prompt
//!
//! The report is produced by an external model, so the schema lives in two
//! places that must agree: the system prompt that instructs the model, and the
//! typed [`AnalysisResult`] the handler parses the model's JSON into.

pub mod prompt;
pub mod types;

pub use types::{AnalysisResult, ConfidenceScore, GuidanceItem, Sentiment, ValidationError};
