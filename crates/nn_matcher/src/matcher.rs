use chrono::NaiveDateTime;
use nn_core::{Article, Group, Side};
use tracing::{debug, trace};

use crate::config::MatchConfig;
use crate::label::{final_order, topic_label};
use crate::profile::TokenProfile;
use crate::similarity::{parse_published, score, Candidate, Score};

struct Entry<'a> {
    article: &'a Article,
    profile: TokenProfile,
    published: Option<NaiveDateTime>,
}

impl<'a> Entry<'a> {
    fn new(article: &'a Article) -> Self {
        Self {
            article,
            profile: TokenProfile::build(article),
            published: parse_published(&article.published),
        }
    }

    fn candidate(&self) -> Candidate<'_> {
        Candidate::new(&self.profile, self.published)
    }
}

/// Group under construction: member indices per side plus the union profile.
#[derive(Default)]
struct Draft {
    left: Vec<usize>,
    right: Vec<usize>,
    profile: TokenProfile,
}

impl Draft {
    fn add(&mut self, side: Side, index: usize, profile: &TokenProfile) {
        match side {
            Side::Left => self.left.push(index),
            Side::Right => self.right.push(index),
        }
        self.profile.absorb(profile);
    }
}

/// Greedy left-to-right grouping of two article lists.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, left: &Article, right: &Article) -> Score {
        let (l, r) = (Entry::new(left), Entry::new(right));
        score(&l.candidate(), &r.candidate(), &self.config)
    }

    pub fn run(&self, left: &[Article], right: &[Article]) -> Vec<Group> {
        let left: Vec<Entry> = left.iter().map(Entry::new).collect();
        let right: Vec<Entry> = right.iter().map(Entry::new).collect();

        let mut used = vec![false; right.len()];
        let mut drafts: Vec<Draft> = Vec::new();
        let mut deferred: Vec<usize> = Vec::new();

        for (i, l) in left.iter().enumerate() {
            match self.best_partner(l, &right, &used) {
                Some((j, best)) => {
                    debug!(
                        "🔗 paired \"{}\" with \"{}\" (score {:.3})",
                        l.article.title, right[j].article.title, best
                    );
                    used[j] = true;
                    let mut draft = Draft::default();
                    draft.add(Side::Left, i, &l.profile);
                    draft.add(Side::Right, j, &right[j].profile);
                    drafts.push(draft);
                }
                None => deferred.push(i),
            }
        }

        for i in deferred {
            self.place(Side::Left, i, &left[i], &mut drafts);
        }
        for j in (0..right.len()).filter(|j| !used[*j]) {
            self.place(Side::Right, j, &right[j], &mut drafts);
        }

        let mut groups: Vec<Group> = drafts
            .into_iter()
            .map(|draft| {
                let left: Vec<Article> =
                    draft.left.iter().map(|&i| left[i].article.clone()).collect();
                let right: Vec<Article> =
                    draft.right.iter().map(|&j| right[j].article.clone()).collect();
                Group {
                    topic: topic_label(&left, &right),
                    left,
                    right,
                }
            })
            .collect();
        final_order(&mut groups);

        debug!(
            "✨ built {} groups ({} two-sided)",
            groups.len(),
            groups.iter().filter(|g| g.is_two_sided()).count()
        );
        groups
    }

    /// Highest qualifying score among unused right entries; the first one wins ties.
    fn best_partner(&self, l: &Entry, right: &[Entry], used: &[bool]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (j, r) in right.iter().enumerate() {
            if used[j] {
                continue;
            }
            let s = score(&l.candidate(), &r.candidate(), &self.config);
            trace!("{:?} for \"{}\" / \"{}\"", s, l.article.title, r.article.title);
            if !s.is_match(self.config.threshold) {
                continue;
            }
            if s.value > best.map_or(0.0, |(_, top)| top) {
                best = Some((j, s.value));
            }
        }
        best
    }

    /// Appends a leftover entry to the first group it fits, or opens a new one.
    fn place(&self, side: Side, index: usize, entry: &Entry, drafts: &mut Vec<Draft>) {
        let target = drafts.iter().position(|draft| {
            score(&entry.candidate(), &Candidate::undated(&draft.profile), &self.config)
                .is_match(self.config.fit_threshold)
        });

        match target {
            Some(g) => {
                debug!("📎 absorbed \"{}\" into group {}", entry.article.title, g);
                drafts[g].add(side, index, &entry.profile);
            }
            None => {
                let mut draft = Draft::default();
                draft.add(side, index, &entry.profile);
                drafts.push(draft);
            }
        }
    }
}

/// Groups `left` and `right` articles into labeled, ordered topic groups.
pub fn match_pairs(left: &[Article], right: &[Article], config: &MatchConfig) -> Vec<Group> {
    Matcher::new(config.clone()).run(left, right)
}
