//! Analysis report types
//!
//! Typed form of the JSON object the model is instructed to return. Parsing
//! into these types already rejects unknown enum values; [`AnalysisResult::validate`]
//! adds the bounds the prompt demands but serde cannot express.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overall management tone across the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Optimistic,
    Cautious,
    Neutral,
    Pessimistic,
}

/// How clear and specific management's own guidance was.
/// Not a measure of confidence in the analysis itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceScore {
    High,
    Medium,
    Low,
}

/// A single forward-looking statement keyed by financial metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceItem {
    pub metric: String,
    /// Description or direct quote; "Not discussed in this call" when absent
    pub outlook: String,
    /// "FY2025", "Q3 2025", etc.; "N/A" when the metric was not discussed
    pub timeframe: String,
}

/// The structured report produced once per uploaded transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub sentiment_reasoning: String,
    pub confidence_score: ConfidenceScore,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub guidance: Vec<GuidanceItem>,
    pub capacity_utilization: String,
    pub growth_initiatives: Vec<String>,
}

/// Bullet list bounds the prompt demands for positives, negatives,
/// and growth initiatives
pub const BULLETS_MIN: usize = 3;
pub const BULLETS_MAX: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must contain {BULLETS_MIN}-{BULLETS_MAX} items, got {count}")]
    BulletCount { field: &'static str, count: usize },

    #[error("guidance must contain at least one row")]
    EmptyGuidance,

    #[error("sentiment_reasoning must not be empty")]
    EmptyReasoning,
}

impl AnalysisResult {
    /// Check the bounds the model was instructed to honor.
    ///
    /// The model is trusted for content but not for shape: a completion that
    /// drops below three bullets or returns no guidance rows is rejected
    /// rather than forwarded to the client.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sentiment_reasoning.trim().is_empty() {
            return Err(ValidationError::EmptyReasoning);
        }

        for (field, list) in [
            ("positives", &self.positives),
            ("negatives", &self.negatives),
            ("growth_initiatives", &self.growth_initiatives),
        ] {
            if list.len() < BULLETS_MIN || list.len() > BULLETS_MAX {
                return Err(ValidationError::BulletCount {
                    field,
                    count: list.len(),
                });
            }
        }

        if self.guidance.is_empty() {
            return Err(ValidationError::EmptyGuidance);
        }

        Ok(())
    }
}
