//! Domain vocabulary driving the miners.
//!
//! The allow-lists and stop-lists live here as an explicit configuration
//! struct passed into each miner, so a deployment can extend them without
//! touching extraction logic. The defaults reproduce the housing-domain
//! vocabulary the tool was originally calibrated against.

use std::collections::HashSet;

use regex::Regex;

use crate::error::RepMinerError;

/// Table names known to belong to the source database schema. An
/// identifier on this list is always accepted by the table miner.
pub const DEFAULT_KNOWN_TABLES: &[&str] = &[
    "admin_units",
    "admin_groupings",
    "properties",
    "prop_groupings",
    "addresses",
    "address_elements",
    "tenancies",
    "tenancy_instances",
    "revenue_accounts",
    "account_balances",
    "transactions",
    "batch_runs",
    "payment_methods",
    "service_requests",
    "works_orders",
    "works_order_versions",
    "inspection_visits",
    "inspection_results",
    "inspections",
    "contractors",
    "job_roles",
    "interested_parties",
    "household_persons",
    "parties",
    "users",
    "first_ref_values",
    "parameter_values",
    "schedule_of_rates",
    "sor_prices",
    "arrears_actions",
    "contact_details",
    "summary_rents",
    "pp_applications",
    "pp_events",
    "status_codes",
    "dual",
];

/// Three-letter column-name prefixes from the source system's naming
/// convention (service request, works order, works order version,
/// contractor, inspection visit, inspection, property, address, admin
/// unit, tenancy, revenue account, transaction).
pub const DEFAULT_COLUMN_PREFIXES: &[&str] = &[
    "srq", "wov", "wor", "con", "ivi", "ins", "pro", "adr", "aun", "tcy", "rac", "tra",
];

/// Common English/domain words that look like table identifiers but never
/// are. Used by the garbage filter on candidate table names.
pub const DEFAULT_NOISE_WORDS: &[&str] = &[
    "the", "from", "above", "below", "flat", "roof", "wall", "door", "bathroom", "kitchen",
    "toilet", "boiler",
];

/// Function names recognized in calculated-field formulas, in canonical
/// casing. Matching is case-insensitive; output uses these spellings.
pub const DEFAULT_FORMULA_FUNCTIONS: &[&str] =
    &["Year", "Month", "Sum", "Count", "Max", "Min", "Avg", "If"];

/// The named constant sets consulted by the miners, with the patterns
/// derived from them compiled once up front.
#[derive(Debug, Clone)]
pub struct Lexicon {
    known_tables: HashSet<String>,
    noise_words: HashSet<String>,
    formula_functions: Vec<String>,
    prefix_re: Regex,
    formula_re: Regex,
}

impl Lexicon {
    /// Build a lexicon from explicit lists. Entries are regex-escaped, so
    /// plain identifiers are always safe; empty prefix or function lists
    /// are rejected because they would compile to match-anything patterns.
    pub fn new(
        known_tables: &[&str],
        column_prefixes: &[&str],
        noise_words: &[&str],
        formula_functions: &[&str],
    ) -> Result<Self, RepMinerError> {
        if column_prefixes.is_empty() {
            return Err(RepMinerError::InvalidLexicon {
                message: "column prefix list must not be empty".to_string(),
            });
        }
        if formula_functions.is_empty() {
            return Err(RepMinerError::InvalidLexicon {
                message: "formula function list must not be empty".to_string(),
            });
        }

        let prefix_alternation = column_prefixes
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let prefix_re = Regex::new(&format!(r"(?i)\b(?:{prefix_alternation})_[a-z_]+\b"))?;

        let function_alternation = formula_functions
            .iter()
            .map(|f| regex::escape(f))
            .collect::<Vec<_>>()
            .join("|");
        let formula_re = Regex::new(&format!(
            r"(?i)=\s*({function_alternation})\s*\(<([^>]+)>\)"
        ))?;

        Ok(Self {
            known_tables: known_tables.iter().map(|t| t.to_lowercase()).collect(),
            noise_words: noise_words.iter().map(|w| w.to_lowercase()).collect(),
            formula_functions: formula_functions.iter().map(|f| f.to_string()).collect(),
            prefix_re,
            formula_re,
        })
    }

    /// True if `name` (already lower-cased) is a known schema table.
    pub fn is_known_table(&self, name: &str) -> bool {
        self.known_tables.contains(name)
    }

    /// True if `word` (already lower-cased) is on the noise stop-list.
    pub fn is_noise_word(&self, word: &str) -> bool {
        self.noise_words.contains(word)
    }

    /// Canonical casing for a formula function matched case-insensitively,
    /// or None if the name is not on the list.
    pub fn canonical_function(&self, name: &str) -> Option<&str> {
        self.formula_functions
            .iter()
            .find(|f| f.eq_ignore_ascii_case(name))
            .map(|f| f.as_str())
    }

    /// Pattern matching a prefixed column token anywhere in the text.
    pub fn prefix_regex(&self) -> &Regex {
        &self.prefix_re
    }

    /// Pattern matching a calculated-field formula invocation.
    pub fn formula_regex(&self) -> &Regex {
        &self.formula_re
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new(
            DEFAULT_KNOWN_TABLES,
            DEFAULT_COLUMN_PREFIXES,
            DEFAULT_NOISE_WORDS,
            DEFAULT_FORMULA_FUNCTIONS,
        )
        .expect("default lexicon is valid")
    }
}
