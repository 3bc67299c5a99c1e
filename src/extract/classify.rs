//! Complexity classification and effort estimation.
//!
//! The weights and thresholds are a fixed policy calibrated empirically
//! against the source estate. Existing migration estimates depend on
//! them, so they must be preserved exactly.

use crate::report::Complexity;

pub const FIELD_WEIGHT: f64 = 0.5;
pub const PARAMETER_WEIGHT: f64 = 2.0;
pub const FORMULA_WEIGHT: f64 = 1.5;
pub const TABLE_WEIGHT: f64 = 1.0;
pub const EMBEDDED_CODE_WEIGHT: f64 = 10.0;

/// Inclusive upper bound of the Simple band.
pub const MEDIUM_THRESHOLD: f64 = 15.0;
/// Inclusive upper bound of the Medium band.
pub const COMPLEX_THRESHOLD: f64 = 30.0;

/// Miner output counts feeding the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCounts {
    pub fields: usize,
    pub parameters: usize,
    pub formulas: usize,
    pub tables: usize,
    pub has_embedded_code: bool,
}

/// Weighted feature score for one report.
pub fn complexity_score(counts: &FeatureCounts) -> f64 {
    counts.fields as f64 * FIELD_WEIGHT
        + counts.parameters as f64 * PARAMETER_WEIGHT
        + counts.formulas as f64 * FORMULA_WEIGHT
        + counts.tables as f64 * TABLE_WEIGHT
        + if counts.has_embedded_code {
            EMBEDDED_CODE_WEIGHT
        } else {
            0.0
        }
}

/// Bucket a score into a tier. Both thresholds are exclusive: a score of
/// exactly 15 is Simple, exactly 30 is Medium.
pub fn classify(score: f64) -> Complexity {
    if score > COMPLEX_THRESHOLD {
        Complexity::Complex
    } else if score > MEDIUM_THRESHOLD {
        Complexity::Medium
    } else {
        Complexity::Simple
    }
}
