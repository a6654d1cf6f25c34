use serde::{Deserialize, Serialize};

/// A short news item as delivered by a feed.
///
/// `summary` is plain text; markup is stripped before an article reaches
/// the matcher. `published` is either empty or `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = published.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Which of the two input lists an article came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// A topic cluster holding articles from both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub topic: String,
    pub left: Vec<Article>,
    pub right: Vec<Article>,
}

impl Group {
    pub fn pair(left: Article, right: Article) -> Self {
        Self {
            topic: String::new(),
            left: vec![left],
            right: vec![right],
        }
    }

    pub fn singleton(side: Side, article: Article) -> Self {
        let mut group = Self {
            topic: String::new(),
            left: Vec::new(),
            right: Vec::new(),
        };
        group.push(side, article);
        group
    }

    pub fn push(&mut self, side: Side, article: Article) {
        match side {
            Side::Left => self.left.push(article),
            Side::Right => self.right.push(article),
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// True when both sides hold at least one article.
    pub fn is_two_sided(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.left.iter().chain(self.right.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserializes_with_defaults() {
        let article: Article = serde_json::from_str(r#"{"title": "Wahlen in Polen"}"#).unwrap();
        assert_eq!(article.title, "Wahlen in Polen");
        assert!(article.summary.is_empty());
        assert!(article.tags.is_empty());
        assert!(article.image.is_none());
    }

    #[test]
    fn test_article_skips_missing_image() {
        let json = serde_json::to_value(Article::new("a", "b")).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_group_sides() {
        let mut group = Group::singleton(Side::Right, Article::new("r", ""));
        assert!(!group.is_two_sided());
        assert_eq!(group.len(), 1);

        group.push(Side::Left, Article::new("l", ""));
        assert!(group.is_two_sided());
        assert_eq!(group.len(), 2);
        assert_eq!(group.articles().count(), 2);
    }
}
