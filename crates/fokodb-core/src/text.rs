// crates/fokodb-core/src/text.rs
use std::cmp::Ordering;

/// Case-folds a string for comparison.
///
/// Only case is folded; accents and other scripts are left as they are.
///
/// # Examples
///
/// ```
/// use fokodb_core::text::fold_key;
///
/// assert_eq!(fold_key("  Antananarivo "), "  antananarivo ");
/// assert_eq!(fold_key("ANDOHARANOFOTSY"), "andoharanofotsy");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Normalizes a user search term: trimmed, then case-folded.
pub fn normalize_term(term: &str) -> String {
    fold_key(term.trim())
}

/// True if `c` separates words in a place name.
#[inline]
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.' | ',')
}

/// Splits a name into its words on runs of whitespace, `-`, `_`, `.` and `,`.
///
/// Empty pieces (leading or trailing separators) are dropped.
pub fn tokenize(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_word_separator).filter(|w| !w.is_empty())
}

/// Case-insensitive name ordering; ties fall back to the exact bytes so the
/// order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

/// Case-insensitive substring test, `needle` already folded.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_key(haystack).contains(folded_needle)
}
