//! Independent metadata miners: runtime parameters, calculated-field
//! formulas, referenced tables, and the embedded-code flag.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::Lexicon;

/// `@prompt('Start Date', ...)` — a runtime prompt invocation.
static PROMPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@prompt\s*\(\s*'([^']+)'").unwrap());

/// A table reference following FROM or JOIN.
static TABLE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:FROM|JOIN)\s+([a-z_][a-z0-9_]*)").unwrap());

/// VBA macro markers. Deliberately case-sensitive: lower-case "function"
/// or "sub" occur constantly in query text, the capitalized keywords only
/// in embedded procedural code.
static VBA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Sub\s+\w+|Function\s+\w+|End\s+Sub)\b").unwrap());

/// Extract runtime prompt parameters from the full sanitized text.
/// Case-sensitive, deduplicated, first-seen order preserved.
pub fn mine_parameters(text: &str) -> Vec<String> {
    let mut parameters: Vec<String> = Vec::new();
    for caps in PROMPT_RE.captures_iter(text) {
        let prompt = &caps[1];
        if !parameters.iter().any(|p| p == prompt) {
            parameters.push(prompt.to_string());
        }
    }
    parameters
}

/// Extract calculated-field formulas, re-emitted with the function name's
/// canonical casing from the lexicon. NOT deduplicated: the same formula
/// appearing twice is two calculated fields.
pub fn mine_formulas(text: &str, lexicon: &Lexicon) -> Vec<String> {
    lexicon
        .formula_regex()
        .captures_iter(text)
        .map(|caps| {
            let function = lexicon.canonical_function(&caps[1]).unwrap_or(&caps[1]);
            format!("{}(<{}>)", function, &caps[2])
        })
        .collect()
}

/// Likely-garbage filter for candidate table identifiers: wrong length,
/// purely numeric, containing a long digit run, or a known noise word.
fn is_likely_garbage(ident: &str, lexicon: &Lexicon) -> bool {
    if ident.len() < 3 || ident.len() > 40 {
        return true;
    }
    if ident.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let mut digit_run = 0usize;
    for c in ident.chars() {
        if c.is_ascii_digit() {
            digit_run += 1;
            if digit_run >= 6 {
                return true;
            }
        } else {
            digit_run = 0;
        }
    }
    lexicon.is_noise_word(ident)
}

/// Extract referenced table names from the coarse query corpus:
/// lower-cased, deduplicated, sorted ascending. An identifier is accepted
/// if it is a known schema table, or if it contains an underscore and
/// survives the garbage filter.
pub fn mine_tables(corpus: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut tables = BTreeSet::new();
    for caps in TABLE_REF_RE.captures_iter(corpus) {
        let ident = caps[1].to_lowercase();
        if lexicon.is_known_table(&ident)
            || (ident.contains('_') && !is_likely_garbage(&ident, lexicon))
        {
            tables.insert(ident);
        }
    }
    tables.into_iter().collect()
}

/// True if the full sanitized text carries embedded VBA-style macro code.
pub fn detect_embedded_code(text: &str) -> bool {
    VBA_RE.is_match(text)
}
