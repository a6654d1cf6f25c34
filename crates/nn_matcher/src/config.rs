use serde::{Deserialize, Serialize};

/// Tunables for a matching run.
///
/// `threshold` and `tag_bonus` are the caller-facing knobs; the remaining
/// constants exist so tests can pin or vary them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum score for the left-to-right pairing pass.
    pub threshold: f64,
    /// Added to the score when the tag sets intersect.
    pub tag_bonus: f64,
    /// Minimum score for absorbing a leftover article into a group.
    pub fit_threshold: f64,
    /// Publication gap in days tolerated without penalty.
    pub near_date_days: i64,
    pub date_penalty_per_day: f64,
    pub max_date_penalty: f64,
    /// Shared strong tokens that qualify a pair on their own.
    pub min_strong_overlap: usize,
    pub epsilon: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.20,
            tag_bonus: 0.35,
            fit_threshold: 0.12,
            near_date_days: 10,
            date_penalty_per_day: 0.01,
            max_date_penalty: 0.08,
            min_strong_overlap: 2,
            epsilon: 0.001,
        }
    }
}

impl MatchConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_tag_bonus(mut self, tag_bonus: f64) -> Self {
        self.tag_bonus = tag_bonus;
        self
    }

    pub fn with_fit_threshold(mut self, fit_threshold: f64) -> Self {
        self.fit_threshold = fit_threshold;
        self
    }
}
