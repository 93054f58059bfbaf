//! Tunable validation policy.

/// Policy constants consumed by the rules and the status derivation.
///
/// Defaults mirror current operational policy; every value can be
/// overridden per call through the builder methods or the CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Maximum DODA age in days before it counts as stale.
    pub max_age_days: i64,
    /// Fuzzy threshold for identifier-like comparisons (plates, entry
    /// numbers, customs offices).
    pub match_threshold: f64,
    /// Relaxed threshold for free-text comparisons (merchandise
    /// description, operator names), where wording legitimately varies.
    pub relaxed_threshold: f64,
    /// Absolute tolerance when comparing quantities and weights.
    pub numeric_tolerance: f64,
    /// Manifest/prefile findings below this count downgrade that rule to a
    /// warning instead of a failure.
    pub partial_failure_cutoff: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_age_days: 3,
            match_threshold: 0.9,
            relaxed_threshold: 0.7,
            numeric_tolerance: 0.01,
            partial_failure_cutoff: 3,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub fn with_max_age_days(mut self, days: i64) -> Self {
        self.max_age_days = days;
        self
    }

    #[must_use]
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_relaxed_threshold(mut self, threshold: f64) -> Self {
        self.relaxed_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_numeric_tolerance(mut self, tolerance: f64) -> Self {
        self.numeric_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_partial_failure_cutoff(mut self, cutoff: usize) -> Self {
        self.partial_failure_cutoff = cutoff;
        self
    }
}
