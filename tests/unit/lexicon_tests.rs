//! Custom-lexicon behavior through the public pipeline.

use pretty_assertions::assert_eq;

use rep_miner::{Extractor, Lexicon};

#[test]
fn test_custom_prefixes_drive_the_fallback_miner() {
    let lexicon = Lexicon::new(
        &["orders"],
        &["ord", "inv"],
        &["the"],
        &["Sum"],
    )
    .unwrap();
    let extractor = Extractor::with_lexicon(lexicon);

    let report = extractor.extract("inv.rep", b"junk ORD_REF_NO junk inv_line_total junk");
    let columns: Vec<_> = report
        .field_aliases
        .iter()
        .map(|f| f.column.as_str())
        .collect();
    assert_eq!(columns, vec!["ord_ref_no", "inv_line_total"]);
    assert_eq!(report.field_aliases[0].alias, "ref no");
    assert_eq!(report.field_aliases[1].alias, "line total");
}

#[test]
fn test_custom_known_tables_bypass_the_garbage_filter() {
    // "dual" has no underscore, so only the allow-list can admit it.
    let with_dual = Lexicon::new(&["dual"], &["ord"], &[], &["Sum"]).unwrap();
    let without = Lexicon::new(&["orders"], &["ord"], &[], &["Sum"]).unwrap();
    let bytes = b"SELECT sysdate JOIN dual WHERE x";

    let seen = Extractor::with_lexicon(with_dual).extract("d.rep", bytes);
    assert_eq!(seen.tables, vec!["dual"]);

    let unseen = Extractor::with_lexicon(without).extract("d.rep", bytes);
    assert!(unseen.tables.is_empty());
}

#[test]
fn test_custom_formula_functions_and_casing() {
    let lexicon = Lexicon::new(&[], &["ord"], &[], &["Median"]).unwrap();
    let report = Extractor::with_lexicon(lexicon)
        .extract("m.rep", b"=median(<wait days>) =Sum(<rent>)");

    // Only the configured function counts, emitted in canonical casing.
    assert_eq!(report.formulas, vec!["Median(<wait days>)"]);
}

#[test]
fn test_default_lexicon_accepts_housing_schema_tables() {
    let bytes = b"SELECT a JOIN service_requests JOIN works_orders WHERE x";
    let report = Extractor::new().extract("wo.rep", bytes);
    assert_eq!(report.tables, vec!["service_requests", "works_orders"]);
}
