//! Report-definition extraction pipeline.
//!
//! Five sequential passes over one sanitized text buffer: sanitize,
//! locate query regions, mine field aliases, mine metadata, classify.
//! Each file is independent, so a batch fans out per file and joins on
//! every result.

pub mod classify;
pub mod fields;
pub mod lexicon;
pub mod metadata;
pub mod query;
pub mod sanitize;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::RepMinerError;
use crate::report::{BatchOutcome, ExtractedReport, ExtractionFailure};
use self::classify::FeatureCounts;
pub use self::lexicon::Lexicon;

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// The report-definition extractor: a pure function of bytes to record,
/// parameterized by the domain lexicon.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    lexicon: Lexicon,
}

impl Extractor {
    /// Extractor with the default housing-domain lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Run all analysis passes over one file's raw bytes.
    ///
    /// Total: every scan is bounded, so this always terminates and never
    /// fails — a file with no recognizable query structure still yields a
    /// valid (Simple) record.
    pub fn extract(&self, file_name: &str, bytes: &[u8]) -> ExtractedReport {
        let text = sanitize::sanitize_bytes(bytes);
        let corpus = query::coarse_query_corpus(&text);

        let field_aliases = fields::mine_field_aliases(&corpus, &text, &self.lexicon);
        let parameters = metadata::mine_parameters(&text);
        let formulas = metadata::mine_formulas(&text, &self.lexicon);
        let tables = metadata::mine_tables(&corpus, &self.lexicon);
        let has_vba = metadata::detect_embedded_code(&text);
        let sql = query::locate_query_excerpt(&text);

        let counts = FeatureCounts {
            fields: field_aliases.len(),
            parameters: parameters.len(),
            formulas: formulas.len(),
            tables: tables.len(),
            has_embedded_code: has_vba,
        };
        let complexity = classify::classify(classify::complexity_score(&counts));

        ExtractedReport {
            file_name: file_name.to_string(),
            sql,
            field_aliases,
            parameters,
            formulas,
            tables,
            has_vba,
            complexity,
            days: complexity.estimated_days(),
            status: ExtractedReport::INITIAL_STATUS.to_string(),
            assigned_to: String::new(),
            actual_days: String::new(),
            notes: String::new(),
            pbi_report_name: String::new(),
            date_completed: String::new(),
            signed_off: false,
            signed_off_by: String::new(),
            signed_off_date: String::new(),
        }
    }
}

/// True for file names the extractor is allowed to process
/// (`.rep` or `.wid`, case-insensitive).
pub fn is_report_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("rep") || ext.eq_ignore_ascii_case("wid"))
        .unwrap_or(false)
}

/// Read and extract one file; a read failure becomes a per-file
/// `ExtractionFailure` rather than an error for the batch.
fn extract_path(extractor: &Extractor, path: &Path) -> Result<ExtractedReport, ExtractionFailure> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match std::fs::read(path) {
        Ok(bytes) => Ok(extractor.extract(&file_name, &bytes)),
        Err(source) => Err(ExtractionFailure {
            file_name,
            error: RepMinerError::ReportReadError {
                path: path.to_path_buf(),
                source,
            }
            .to_string(),
        }),
    }
}

/// Extract a batch of files with per-file fan-out and join-all semantics:
/// every file is processed (in parallel for larger batches) and the
/// outcome carries a record or a failure for each one. One file's failure
/// never aborts its siblings.
pub fn extract_files(extractor: &Extractor, paths: &[PathBuf]) -> BatchOutcome {
    let results: Vec<Result<ExtractedReport, ExtractionFailure>> =
        if paths.len() >= PARALLEL_THRESHOLD {
            paths
                .par_iter()
                .map(|path| extract_path(extractor, path))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| extract_path(extractor, path))
                .collect()
        };

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(failure) => outcome.failures.push(failure),
        }
    }
    outcome
}
