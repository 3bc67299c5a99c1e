//! Batch orchestration tests: input gathering, per-file failure
//! isolation, and JSON output.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use rep_miner::{
    extract_files, gather_inputs, run_extraction, ExtractOptions, Extractor, RepMinerError,
};

fn write_report_file(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text.as_bytes()).unwrap();
    path
}

#[test]
fn test_gather_inputs_walks_directories_for_report_files() {
    let dir = TempDir::new().unwrap();
    write_report_file(&dir, "b_voids.wid", "SELECT x FROM");
    write_report_file(&dir, "a_arrears.rep", "SELECT y FROM");
    write_report_file(&dir, "readme.txt", "not a report");

    let gathered = gather_inputs(&[dir.path().to_path_buf()]).unwrap();
    let names: Vec<_> = gathered
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a_arrears.rep", "b_voids.wid"]);
    assert!(gathered.skipped.is_empty());
}

#[test]
fn test_gather_inputs_rejects_named_non_report_files() {
    let dir = TempDir::new().unwrap();
    let report = write_report_file(&dir, "arrears.rep", "SELECT x FROM");
    let other = write_report_file(&dir, "notes.txt", "plain text");

    let gathered = gather_inputs(&[report.clone(), other.clone()]).unwrap();
    assert_eq!(gathered.files, vec![report]);
    assert_eq!(gathered.skipped, vec![other]);
}

#[test]
fn test_gather_inputs_errors_when_nothing_eligible() {
    let dir = TempDir::new().unwrap();
    let other = write_report_file(&dir, "notes.txt", "plain text");

    let result = gather_inputs(&[other]);
    assert!(matches!(result, Err(RepMinerError::NoReportFiles)));
}

#[test]
fn test_one_failure_never_aborts_sibling_files() {
    let dir = TempDir::new().unwrap();
    let good = write_report_file(
        &dir,
        "good.rep",
        r#"SELECT prop.ref_no "Property Reference" FROM properties"#,
    );
    let missing = dir.path().join("missing.rep");

    let outcome = extract_files(&Extractor::new(), &[good, missing]);
    assert_eq!(outcome.reports.len(), 1);
    assert_eq!(outcome.reports[0].file_name, "good.rep");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].file_name, "missing.rep");
}

#[test]
fn test_large_batch_fans_out_and_joins_all() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..20)
        .map(|i| {
            write_report_file(
                &dir,
                &format!("report_{i:02}.rep"),
                &format!(r#"SELECT t.col_{i} "Column {i:02}" FROM tenancies"#),
            )
        })
        .collect();

    let outcome = extract_files(&Extractor::new(), &paths);
    assert_eq!(outcome.reports.len(), 20);
    assert!(outcome.failures.is_empty());
    // Join preserves input order even when processed in parallel.
    let names: Vec<_> = outcome.reports.iter().map(|r| r.file_name.clone()).collect();
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_run_extraction_writes_json_outcome() {
    let dir = TempDir::new().unwrap();
    write_report_file(
        &dir,
        "arrears.rep",
        r#"SELECT rac.account_ref "Account Ref" FROM revenue_accounts"#,
    );
    let output_path = dir.path().join("outcome.json");

    let outcome = run_extraction(ExtractOptions {
        inputs: vec![dir.path().to_path_buf()],
        output_path: Some(output_path.clone()),
        verbose: false,
    })
    .unwrap();
    assert_eq!(outcome.reports.len(), 1);

    let json = fs::read_to_string(&output_path).unwrap();
    assert!(json.contains("\"fileName\": \"arrears.rep\""));
    assert!(json.contains("\"complexity\": \"Simple\""));
    assert!(json.contains("\"days\": 0.5"));
}
