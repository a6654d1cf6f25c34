use std::collections::BTreeSet;

use nn_core::Article;

use crate::normalize::{canonicalize, tokenize};
use crate::vocab::{is_weak_tag, is_weak_token};

/// Canonical token sets derived from one article, or the union over a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenProfile {
    /// Title and summary tokens.
    pub all: BTreeSet<String>,
    /// `all` without generic vocabulary.
    pub strong: BTreeSet<String>,
    /// Tokens taken from the article's tags.
    pub tags: BTreeSet<String>,
}

impl TokenProfile {
    pub fn build(article: &Article) -> Self {
        let text = format!("{} {}", article.title, article.summary);
        let all: BTreeSet<String> = tokenize(&text).iter().map(|t| canonicalize(t)).collect();
        let strong = all.iter().filter(|t| !is_weak_token(t)).cloned().collect();

        Self {
            all,
            strong,
            tags: tag_tokens(&article.tags),
        }
    }

    /// Adds every token of `other`.
    pub fn absorb(&mut self, other: &TokenProfile) {
        self.all.extend(other.all.iter().cloned());
        self.strong.extend(other.strong.iter().cloned());
        self.tags.extend(other.tags.iter().cloned());
    }
}

/// Canonical tokens of the given tags, each tag tokenized on its own.
pub fn tag_tokens(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .flat_map(|tag| tokenize(tag))
        .filter(|t| !is_weak_tag(t))
        .map(|t| canonicalize(&t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_build_profile() {
        let article = Article::new("Regierung plant Sanktionen", "Neue Sanktionen gegen Russland")
            .with_tags(["Politik", "Russland", "Ukraine-Krieg"]);
        let profile = TokenProfile::build(&article);

        assert_eq!(profile.all, set(&["neue", "plant", "regierung", "russland", "sanktio"]));
        assert_eq!(profile.strong, set(&["neue", "plant", "russland", "sanktio"]));
        assert_eq!(profile.tags, set(&["krieg", "russland", "ukraine"]));
    }

    #[test]
    fn test_strong_is_subset_of_all() {
        let article = Article::new("Studie: Menschen arbeiten mehr", "Bericht zur Arbeit in Europa");
        let profile = TokenProfile::build(&article);
        assert!(profile.strong.is_subset(&profile.all));
        assert!(!profile.strong.contains("mensch"));
        assert!(profile.strong.contains("europa"));
    }

    #[test]
    fn test_empty_article_has_empty_profile() {
        let profile = TokenProfile::build(&Article::default());
        assert_eq!(profile, TokenProfile::default());
    }

    #[test]
    fn test_tags_filter_weak_words_before_canonicalizing() {
        // "schweizer" is not a weak tag even though it canonicalizes to one
        let tags = vec!["Schweizer Armee".to_string(), "Politik".to_string()];
        assert_eq!(tag_tokens(&tags), set(&["arme", "schweiz"]));
    }

    #[test]
    fn test_absorb_is_union() {
        let polen = Article::new("Wahlen in Polen", "").with_tags(["Polen"]);
        let streik = Article::new("Streik in Frankreich", "").with_tags(["Streik"]);
        let mut merged = TokenProfile::build(&polen);
        let other = TokenProfile::build(&streik);
        merged.absorb(&other);

        assert!(merged.all.is_superset(&other.all));
        assert!(merged.all.contains("wahl"));
        assert_eq!(merged.tags, set(&["polen", "streik"]));
    }
}
