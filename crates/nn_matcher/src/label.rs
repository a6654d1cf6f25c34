//! Topic labels and final group ordering.

use std::cmp::Reverse;

use nn_core::{Article, Group};

use crate::normalize::canonicalize;
use crate::profile::tag_tokens;

pub const PLACEHOLDER_TOPIC: &str = "Topic";

const MAX_LABEL_TAGS: usize = 2;

/// Human-readable topic for a group.
///
/// Tag tokens shared by more than one article win (at most two, most
/// frequent first). Otherwise the shortest title is used.
pub fn topic_label(left: &[Article], right: &[Article]) -> String {
    let items: Vec<&Article> = left.iter().chain(right.iter()).collect();

    // (token, count) in first-seen order
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in &items {
        for token in tag_tokens(&item.tags) {
            match counts.iter_mut().find(|(t, _)| *t == token) {
                Some((_, count)) => *count += 1,
                None => counts.push((token, 1)),
            }
        }
    }
    counts.retain(|(_, count)| *count > 1);
    counts.sort_by_key(|(_, count)| Reverse(*count));

    if !counts.is_empty() {
        return counts
            .iter()
            .take(MAX_LABEL_TAGS)
            .map(|(token, _)| original_tag(&items, token).unwrap_or_else(|| token.clone()))
            .collect::<Vec<_>>()
            .join(" / ");
    }

    shortest_title(&items).unwrap_or_else(|| PLACEHOLDER_TOPIC.to_string())
}

fn original_tag(items: &[&Article], token: &str) -> Option<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter())
        .find(|tag| canonicalize(tag) == token)
        .map(|tag| tag.trim().to_string())
}

fn shortest_title(items: &[&Article]) -> Option<String> {
    items
        .iter()
        .enumerate()
        .min_by_key(|(i, item)| {
            (
                item.title.chars().count(),
                Reverse(item.summary.chars().count()),
                *i,
            )
        })
        .map(|(_, item)| item.title.trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Two-sided groups first, then larger groups; ties keep creation order.
pub fn final_order(groups: &mut [Group]) {
    groups.sort_by_key(|g| (Reverse(g.is_two_sided()), Reverse(g.len())));
}
