//! Query normalization helpers.

use unicode_normalization::UnicodeNormalization;

/// Trims and uppercases user input.
pub fn normalize_query(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Removes combining diacritical marks after canonical decomposition,
/// so "Itaú" and "ITAU" fold to the same letters.
pub fn strip_diacritics(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
