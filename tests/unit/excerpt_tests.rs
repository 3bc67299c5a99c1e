//! Query-region locator behavior at the public API level: the displayed
//! excerpt and the coarse mining corpus are distinct scans with different
//! rules.

use pretty_assertions::assert_eq;

use rep_miner::Extractor;

#[test]
fn test_excerpt_keeps_its_terminating_clause_token() {
    let columns: String = (0..30)
        .map(|i| format!("tcy.col{i:02} ,"))
        .collect::<Vec<_>>()
        .join(" ");
    let text = format!(
        "select {columns} tcy.last_col from tenancies where tcy.active = 1 order by 1 extra"
    );
    let report = Extractor::new().extract("t.rep", text.as_bytes());

    assert!(report.sql.ends_with("order"));
    assert!(!report.sql.contains("extra"));
}

#[test]
fn test_excerpt_survives_missing_trailing_clause() {
    let text = "junk select tcy.tenancy_ref , prop.ref_no from tenancies";
    let report = Extractor::new().extract("t.rep", text.as_bytes());

    assert_eq!(report.sql, "select tcy.tenancy_ref , prop.ref_no from tenancies");
}

#[test]
fn test_mining_sees_spans_the_excerpt_does_not() {
    // The excerpt locks onto the first plausible SELECT, but alias mining
    // covers every SELECT span in the file.
    let text = r#"select a.first_col , a.extra_ref "First Label" from t1
        garbage bytes
        SELECT b.other_col , b.second_ref "Second Label" FROM t2"#;
    let report = Extractor::new().extract("multi.rep", text.as_bytes());

    assert!(report.sql.starts_with("select a.first_col"));
    let aliases: Vec<_> = report
        .field_aliases
        .iter()
        .map(|f| f.alias.as_str())
        .collect();
    assert!(aliases.contains(&"First Label"));
    assert!(aliases.contains(&"Second Label"));
}
