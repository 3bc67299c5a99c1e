//! Field-alias mining: (source column, display label) pairs.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::Lexicon;
use crate::report::FieldAlias;

/// Below this many primary pairs, the naming-convention fallback kicks in.
const FALLBACK_THRESHOLD: usize = 5;

/// `, prop.ref_no "Property Reference"` — a column followed by its quoted
/// display label, as report queries alias their output columns.
static ALIAS_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#",\s*([\w.]+)\s+"([^"]{3,50})""#).unwrap());

/// A label is kept only if it contains at least one letter or underscore;
/// labels that are entirely digits, whitespace, and punctuation are
/// structure noise, not display names.
fn label_is_meaningful(label: &str) -> bool {
    label.chars().any(|c| c == '_' || c.is_alphabetic())
}

/// Extract field aliases from the coarse query corpus, backfilling from
/// the full sanitized text via the column-prefix naming convention when
/// the primary scan finds too few pairs.
///
/// The result is deduplicated by column, first occurrence winning.
pub fn mine_field_aliases(corpus: &str, full_text: &str, lexicon: &Lexicon) -> Vec<FieldAlias> {
    let mut fields: Vec<FieldAlias> = Vec::new();

    for caps in ALIAS_PAIR_RE.captures_iter(corpus) {
        let label = caps[2].trim();
        if label_is_meaningful(label) {
            fields.push(FieldAlias {
                column: caps[1].trim().to_string(),
                alias: label.to_string(),
            });
        }
    }

    if fields.len() < FALLBACK_THRESHOLD {
        let mut seen_tokens = HashSet::new();
        for token_match in lexicon.prefix_regex().find_iter(full_text) {
            let column = token_match.as_str().to_lowercase();
            if seen_tokens.insert(column.clone()) {
                // srq_ref_no -> "ref no": drop the prefix segment, join the
                // rest with spaces.
                let alias = column.split('_').skip(1).collect::<Vec<_>>().join(" ");
                fields.push(FieldAlias { column, alias });
            }
        }
    }

    let mut seen_columns = HashSet::new();
    fields.retain(|field| seen_columns.insert(field.column.clone()));
    fields
}
