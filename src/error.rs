//! Error types for rep-miner

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during batch extraction
#[derive(Error, Debug)]
pub enum RepMinerError {
    #[error("Failed to read report file: {path}")]
    ReportReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a report definition file: {path} (expected .rep or .wid)")]
    UnsupportedExtension { path: PathBuf },

    #[error("Failed to scan input directory: {path}")]
    DirectoryScanError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("No report definition files found (expected .rep or .wid)")]
    NoReportFiles,

    #[error("Invalid lexicon entry: {message}")]
    InvalidLexicon { message: String },

    #[error("Failed to write extraction output to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize extraction output: {message}")]
    SerializeError { message: String },
}

impl From<regex::Error> for RepMinerError {
    fn from(err: regex::Error) -> Self {
        RepMinerError::InvalidLexicon {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepMinerError {
    fn from(err: serde_json::Error) -> Self {
        RepMinerError::SerializeError {
            message: err.to_string(),
        }
    }
}
