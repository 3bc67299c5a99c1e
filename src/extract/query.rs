//! Query-region location inside the sanitized text stream.
//!
//! Two deliberately separate scans: a coarse corpus of every
//! SELECT..FROM/WHERE span (consumed by the alias and table miners, never
//! emitted), and a precise bounded excerpt of the best query for the
//! record's `sql` field. Their matching rules and purposes differ, so they
//! must not be merged.

use std::sync::LazyLock;

use regex::Regex;

/// Per-match cap on the coarse SELECT..FROM/WHERE span.
const SECTION_SCAN_CAP: usize = 10_000;
/// Character window examined from the excerpt start position.
const EXCERPT_WINDOW: usize = 8_000;
/// Maximum tokens re-assembled into the excerpt.
const EXCERPT_MAX_TOKENS: usize = 250;
/// Minimum tokens collected before a trailing clause may cut the excerpt.
const EXCERPT_MIN_TOKENS: usize = 25;
/// Final length cap on the emitted excerpt.
const EXCERPT_MAX_CHARS: usize = 1_500;

static SQL_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)SELECT.{{0,{SECTION_SCAN_CAP}}}?(?:FROM|WHERE)"
    ))
    .unwrap()
});

/// Preferred excerpt start: a SELECT immediately followed by an aliased
/// column (`select prop.ref_no "Property Reference"`).
static ALIASED_SELECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)select\s+[\w.]+\s+"[^"]+""#).unwrap());

/// Looser fallback: any SELECT reaching a FROM within 500 characters.
static LOOSE_SELECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)select\s+(?:distinct\s+)?[\w.()]+.{10,500}?from\s+\w+").unwrap());

/// Build the coarse candidate corpus: every non-overlapping substring from
/// a case-insensitive SELECT up to the next FROM or WHERE (capped per
/// match), joined with newlines. Empty when the file contains no
/// recognizable query structure.
pub fn coarse_query_corpus(text: &str) -> String {
    let sections: Vec<&str> = SQL_SECTION_RE.find_iter(text).map(|m| m.as_str()).collect();
    sections.join("\n")
}

/// Token that ends the excerpt once the main FROM has been passed.
fn is_trailing_clause(token: &str) -> bool {
    token.eq_ignore_ascii_case("order")
        || token.eq_ignore_ascii_case("group")
        || token.eq_ignore_ascii_case("having")
        || token == ";"
}

/// Recover a bounded, human-readable excerpt of the embedded query for
/// display and audit — not for execution.
///
/// From the best start position, up to 8000 characters are split into
/// whitespace tokens and re-assembled (at most 250 of them) under a
/// balanced-parenthesis cutoff: once a FROM token has been seen, paren
/// depth has returned to zero, and enough tokens are collected, the next
/// ORDER/GROUP/HAVING/`;` token ends the excerpt. This avoids truncating
/// mid-subquery while still cutting trailing clauses.
///
/// Returns the empty string when no query start is found; that is not an
/// error.
pub fn locate_query_excerpt(text: &str) -> String {
    let start = ALIASED_SELECT_RE
        .find(text)
        .map(|m| m.start())
        .or_else(|| LOOSE_SELECT_RE.find(text).map(|m| m.start()));
    let Some(start) = start else {
        return String::new();
    };

    let window: String = text[start..].chars().take(EXCERPT_WINDOW).collect();

    let mut parts: Vec<&str> = Vec::new();
    let mut depth: i64 = 0;
    let mut seen_from = false;
    for token in window.split_whitespace().take(EXCERPT_MAX_TOKENS) {
        if token.eq_ignore_ascii_case("from") {
            seen_from = true;
        }
        parts.push(token);
        depth += token.matches('(').count() as i64;
        depth -= token.matches(')').count() as i64;
        // The terminator token itself is retained in the excerpt.
        if seen_from && depth <= 0 && parts.len() > EXCERPT_MIN_TOKENS && is_trailing_clause(token)
        {
            break;
        }
    }

    let joined = parts.join(" ");
    joined
        .chars()
        .filter(|c| (' '..='~').contains(c))
        .take(EXCERPT_MAX_CHARS)
        .collect()
}
