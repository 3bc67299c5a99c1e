//! rep-miner: a legacy report-definition extractor
//!
//! This library mines Business Objects report files (.rep/.wid) for their
//! embedded query, field aliases, runtime parameters, calculated-field
//! formulas and referenced tables, and derives a migration complexity
//! tier plus an effort estimate for each report.

pub mod error;
pub mod extract;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use walkdir::WalkDir;

pub use error::RepMinerError;
pub use extract::{extract_files, is_report_file, Extractor, Lexicon};
pub use report::{BatchOutcome, Complexity, ExtractedReport, ExtractionFailure, FieldAlias};

/// Options for extracting a batch of report files
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Report files and/or directories to scan for .rep/.wid files
    pub inputs: Vec<PathBuf>,
    /// Where to write the JSON batch outcome (stdout if absent)
    pub output_path: Option<PathBuf>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Input paths partitioned by the extension filter.
#[derive(Debug, Clone, Default)]
pub struct GatheredInputs {
    /// Eligible .rep/.wid files, in input order (directories walked sorted)
    pub files: Vec<PathBuf>,
    /// Explicitly named paths rejected before extraction
    pub skipped: Vec<PathBuf>,
}

/// Resolve the input paths into the eligible file list. Directories are
/// walked recursively for .rep/.wid files; explicitly named files with
/// another extension are rejected up front, never passed to the extractor.
pub fn gather_inputs(inputs: &[PathBuf]) -> Result<GatheredInputs, RepMinerError> {
    let mut gathered = GatheredInputs::default();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.map_err(|source| RepMinerError::DirectoryScanError {
                    path: input.clone(),
                    source,
                })?;
                if entry.file_type().is_file() && is_report_file(entry.path()) {
                    gathered.files.push(entry.into_path());
                }
            }
        } else if is_report_file(input) {
            gathered.files.push(input.clone());
        } else {
            gathered.skipped.push(input.clone());
        }
    }

    if gathered.files.is_empty() {
        return Err(RepMinerError::NoReportFiles);
    }
    Ok(gathered)
}

/// Extract every eligible report file in the batch
pub fn run_extraction(options: ExtractOptions) -> Result<BatchOutcome> {
    // Step 1: resolve inputs through the extension filter
    let gathered = gather_inputs(&options.inputs)?;

    if options.verbose {
        for skipped in &gathered.skipped {
            println!("Skipping {} (expected .rep or .wid)", skipped.display());
        }
        println!("Found {} report files", gathered.files.len());
    }

    // Step 2: fan out over the batch, joining on every per-file result
    let extractor = Extractor::new();
    let outcome = extract_files(&extractor, &gathered.files);

    if options.verbose {
        println!(
            "Extracted {} reports ({} failures)",
            outcome.reports.len(),
            outcome.failures.len()
        );
    }

    // Step 3: write the outcome where asked
    if let Some(output_path) = &options.output_path {
        let json = serde_json::to_string_pretty(&outcome).map_err(RepMinerError::from)?;
        std::fs::write(output_path, json).map_err(|source| RepMinerError::OutputWriteError {
            path: output_path.clone(),
            source,
        })?;

        if options.verbose {
            println!("Wrote outcome to {}", output_path.display());
        }
    }

    Ok(outcome)
}
