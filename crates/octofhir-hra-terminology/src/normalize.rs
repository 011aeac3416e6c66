//! Lookup-key normalization
//!
//! Vocabulary labels are matched after trimming, case-folding, and collapsing
//! internal whitespace, so cosmetic differences between questionnaire exports
//! do not break classification. Diacritics are preserved; Polish labels match
//! only their own spellings.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("literal pattern"));

/// Normalize a label into the key form used by all vocabulary indices.
pub fn lookup_key(label: &str) -> String {
    let folded = label.trim().to_lowercase();
    WHITESPACE.replace_all(&folded, " ").into_owned()
}
