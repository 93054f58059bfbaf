//! Fuzzy matching between extracted field values.
//!
//! The match decision is deliberately simple and auditable: exact equality
//! after normalization, then containment (one value inside the other, which
//! covers short vs. full person names), then token-set overlap against a
//! threshold. Sentinels and blanks never match anything.

use std::collections::BTreeSet;

use cruce_model::Sentinel;

use crate::text::normalize;

/// Decides whether two raw field values refer to the same thing.
///
/// `threshold` applies only to the token-overlap step; exact and containment
/// matches succeed at any threshold. Symmetric in `a` and `b`.
pub fn matches(a: &str, b: &str, threshold: f64) -> bool {
    if is_sentinel(a) || is_sentinel(b) {
        return false;
    }
    let left = normalize(a);
    let right = normalize(b);
    if left.is_empty() || right.is_empty() {
        return false;
    }
    if left == right || left.contains(&right) || right.contains(&left) {
        return true;
    }
    token_similarity(&left, &right) >= threshold
}

/// Diagnostic similarity in `[0, 1]` for report comparisons.
///
/// Pairs that match by equality or containment score 1.0. Otherwise the
/// score is the larger of the token overlap and the normalized edit-distance
/// similarity; edit distance keeps single-token values such as plates from
/// collapsing to 0. This score never feeds the match decision.
pub fn similarity(a: &str, b: &str) -> f64 {
    if is_sentinel(a) || is_sentinel(b) {
        return 0.0;
    }
    let left = normalize(a);
    let right = normalize(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    if left == right || left.contains(&right) || right.contains(&left) {
        return 1.0;
    }
    token_similarity(&left, &right).max(strsim::normalized_levenshtein(&left, &right))
}

fn is_sentinel(value: &str) -> bool {
    Sentinel::of(value.trim()).is_some()
}

/// Jaccard overlap of whitespace tokens. Inputs must be normalized.
fn token_similarity(left: &str, right: &str) -> f64 {
    let tokens_left: BTreeSet<&str> = left.split_whitespace().collect();
    let tokens_right: BTreeSet<&str> = right.split_whitespace().collect();
    let union = tokens_left.union(&tokens_right).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = tokens_left.intersection(&tokens_right).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_after_normalization() {
        assert!(matches("TIJUANA", "tijuana", 0.9));
        assert!(matches("Cd. Juárez", "cd. juarez", 0.9));
    }

    #[test]
    fn containment_covers_partial_names() {
        assert!(matches("Juan Pérez", "Juan Pérez García", 0.9));
        assert!(matches("Juan Pérez García", "Juan Pérez", 0.9));
    }

    #[test]
    fn token_overlap_respects_threshold() {
        // Reordered wording, 4 of 5 distinct tokens shared: overlap 0.8.
        // Not a containment case because the token order differs.
        let a = "cajas de fruta fresca importada";
        let b = "fruta de cajas fresca";
        assert!(matches(a, b, 0.7));
        assert!(!matches(a, b, 0.9));
    }

    #[test]
    fn disjoint_values_never_match() {
        assert!(!matches("ABC-123", "XYZ-789", 0.7));
    }

    #[test]
    fn blank_sides_never_match() {
        assert!(!matches("", "", 0.9));
        assert!(!matches("   ", "Tijuana", 0.1));
        assert!(!matches("Tijuana", "", 0.1));
    }

    #[test]
    fn sentinels_never_match() {
        assert!(!matches("NO_ENCONTRADO", "NO_ENCONTRADO", 0.1));
        assert!(!matches("NO_LEGIBLE", "NO_LEGIBLE", 0.1));
        // Textually similar to the token itself is still not a match.
        assert!(!matches("NO_ENCONTRADO", "no encontrado", 0.1));
        assert!(!matches("ABC-123", "NO_LEGIBLE", 0.1));
    }

    #[test]
    fn similarity_scores_matched_pairs_as_one() {
        assert!((similarity("TIJUANA", "tijuana") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("Juan Pérez", "Juan Pérez García") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_uses_edit_distance_for_single_tokens() {
        // Jaccard alone would score these 0.0.
        let score = similarity("ABC-123", "ABC-128");
        assert!(score > 0.8 && score < 1.0, "score was {score}");
    }

    #[test]
    fn similarity_is_zero_for_sentinels_and_blanks() {
        assert!(similarity("NO_ENCONTRADO", "NO_ENCONTRADO").abs() < f64::EPSILON);
        assert!(similarity("", "Tijuana").abs() < f64::EPSILON);
    }
}
