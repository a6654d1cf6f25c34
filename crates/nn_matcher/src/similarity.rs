//! Pairwise similarity score and the qualification gate.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::config::MatchConfig;
use crate::profile::TokenProfile;
use crate::vocab::is_anchor;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses `YYYY-MM-DD HH:MM`; anything else counts as undated.
pub fn parse_published(published: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(published.trim(), DATE_FORMAT).ok()
}

/// One side of a comparison: a single article or a group aggregate.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub profile: &'a TokenProfile,
    pub published: Option<NaiveDateTime>,
}

impl<'a> Candidate<'a> {
    pub fn new(profile: &'a TokenProfile, published: Option<NaiveDateTime>) -> Self {
        Self { profile, published }
    }

    pub fn undated(profile: &'a TokenProfile) -> Self {
        Self::new(profile, None)
    }
}

/// Which qualification clauses held for a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gate {
    pub shared_tag: bool,
    pub strong_overlap: bool,
    pub anchor_corroborated: bool,
}

impl Gate {
    pub fn qualifies(&self) -> bool {
        self.shared_tag || self.strong_overlap || self.anchor_corroborated
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub value: f64,
    pub gate: Gate,
}

impl Score {
    pub fn qualifies(&self) -> bool {
        self.gate.qualifies()
    }

    pub fn is_match(&self, threshold: f64) -> bool {
        self.qualifies() && self.value >= threshold
    }
}

/// Overlap relative to the smaller set.
pub fn jaccard_recall(a: &BTreeSet<String>, b: &BTreeSet<String>, epsilon: f64) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count() as f64;
    shared / (a.len().min(b.len()) as f64 + epsilon)
}

pub fn date_penalty(
    a: Option<NaiveDateTime>,
    b: Option<NaiveDateTime>,
    config: &MatchConfig,
) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    let days = (a - b).num_days().abs();
    if days <= config.near_date_days {
        return 0.0;
    }
    let over = (days - config.near_date_days) as f64;
    config.max_date_penalty.min(config.date_penalty_per_day * over)
}

pub fn score(left: &Candidate<'_>, right: &Candidate<'_>, config: &MatchConfig) -> Score {
    let (l, r) = (left.profile, right.profile);

    let shared_tag = l.tags.intersection(&r.tags).next().is_some();
    let strong_shared: BTreeSet<&String> = l.strong.intersection(&r.strong).collect();

    let mut value = jaccard_recall(&l.strong, &r.strong, config.epsilon);
    if shared_tag {
        value += config.tag_bonus;
    }
    value = (value - date_penalty(left.published, right.published, config)).max(0.0);

    let shared_anchors = strong_shared.iter().filter(|t| is_anchor(t)).count();
    let anchor_corroborated = shared_anchors > 0 && {
        let context = l
            .all
            .intersection(&r.all)
            .filter(|t| !is_anchor(t))
            .count();
        let strong_context = strong_shared.len() - shared_anchors;
        context >= 1 || strong_context >= 2
    };

    Score {
        value,
        gate: Gate {
            shared_tag,
            strong_overlap: strong_shared.len() >= config.min_strong_overlap,
            anchor_corroborated,
        },
    }
}
