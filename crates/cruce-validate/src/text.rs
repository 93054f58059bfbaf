//! String canonicalization for fuzzy comparison.
//!
//! Extracted text arrives with inconsistent casing, accents, and spacing
//! ("Cd. Juárez " vs "cd juarez"). Every comparison in the rules goes
//! through [`normalize`] first.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes a string for comparison: decomposes (NFD) and drops
/// combining marks, lowercases, collapses whitespace runs, trims.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let unaccented: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    unaccented
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
