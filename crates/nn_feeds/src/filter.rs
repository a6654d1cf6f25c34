use std::collections::HashSet;

use nn_core::Article;
use nn_matcher::normalize;

/// Drops articles whose URL or normalized title was already seen.
pub fn dedup(articles: Vec<Article>) -> Vec<Article> {
    let mut seen_urls = HashSet::new();
    let mut seen_titles = HashSet::new();
    articles
        .into_iter()
        .filter(|article| {
            let url_is_new = article.url.is_empty() || seen_urls.insert(article.url.clone());
            let title = normalize(&article.title)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            let title_is_new = title.is_empty() || seen_titles.insert(title);
            url_is_new && title_is_new
        })
        .collect()
}

/// Keeps articles containing every whitespace-separated term of `query`.
///
/// Matching ignores case and diacritics and looks at title, summary and tags.
pub fn filter_articles(articles: Vec<Article>, query: &str) -> Vec<Article> {
    let terms: Vec<String> = normalize(query).split_whitespace().map(str::to_string).collect();
    if terms.is_empty() {
        return articles;
    }
    articles
        .into_iter()
        .filter(|article| {
            let haystack = normalize(&format!(
                "{} {} {}",
                article.title,
                article.summary,
                article.tags.join(" ")
            ));
            terms.iter().all(|term| haystack.contains(term.as_str()))
        })
        .collect()
}
