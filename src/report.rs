//! Output records produced by the extractor.
//!
//! One `ExtractedReport` per successfully mined file, one
//! `ExtractionFailure` per file that could not be processed. Both are
//! serialized camelCase to match the tracking system's row format.

use serde::Serialize;

/// A (source column, display label) pair mined from the report's query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAlias {
    /// Source column reference, possibly dotted (e.g., "prop.ref_no")
    pub column: String,
    /// Human-readable display label shown in the original report
    pub alias: String,
}

/// Migration complexity tier derived from the weighted feature score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Effort estimate in developer-days. A pure function of the tier;
    /// the tracking system relies on these exact values.
    pub fn estimated_days(self) -> f64 {
        match self {
            Complexity::Simple => 0.5,
            Complexity::Medium => 1.5,
            Complexity::Complex => 3.0,
        }
    }
}

/// Everything the extractor recovered from one report definition file,
/// plus the workflow defaults the tracking system takes ownership of.
///
/// Immutable once produced: the extractor never recomputes or updates a
/// record after emitting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedReport {
    pub file_name: String,
    /// Readable query excerpt, at most 1500 characters; empty when no
    /// query region was found (which is not an error)
    pub sql: String,
    /// Deduplicated by column, first occurrence wins
    pub field_aliases: Vec<FieldAlias>,
    /// Runtime prompt parameters, first-seen order, case-sensitive
    pub parameters: Vec<String>,
    /// Calculated-field formulas; repeats are meaningful, never deduplicated
    pub formulas: Vec<String>,
    /// Referenced table names, lower-cased, sorted, unique
    pub tables: Vec<String>,
    #[serde(rename = "hasVBA")]
    pub has_vba: bool,
    pub complexity: Complexity,
    pub days: f64,

    // Workflow state owned by the external tracker. Initialized to
    // defaults here, never touched by the extractor again.
    pub status: String,
    pub assigned_to: String,
    pub actual_days: String,
    pub notes: String,
    pub pbi_report_name: String,
    pub date_completed: String,
    pub signed_off: bool,
    pub signed_off_by: String,
    pub signed_off_date: String,
}

impl ExtractedReport {
    /// Default workflow status for a freshly extracted report.
    pub const INITIAL_STATUS: &'static str = "not_started";
}

/// Per-file failure record. Isolated: one failure never aborts the
/// processing of sibling files in the same batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionFailure {
    pub file_name: String,
    pub error: String,
}

/// Combined result of one submitted batch: every input file appears in
/// exactly one of the two lists.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub reports: Vec<ExtractedReport>,
    pub failures: Vec<ExtractionFailure>,
}
