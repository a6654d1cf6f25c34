use clap::{Args, Subcommand};
use nn_core::Result;

use crate::client::ArticleFetcher;
use crate::filter::filter_articles;
use crate::sources::FeedRegistry;

#[derive(Args, Debug)]
pub struct FeedArgs {
    #[command(subcommand)]
    pub command: FeedCommands,
}

#[derive(Subcommand, Debug)]
pub enum FeedCommands {
    /// List configured feeds
    List,
    /// Fetch one feed and print its articles as JSON
    Fetch {
        /// Feed key (e.g. srf, tagesschau)
        feed: String,
        /// Maximum number of articles
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
        /// Only keep articles containing every term
        #[arg(short, long)]
        query: Option<String>,
    },
}

pub async fn handle_command(
    args: FeedArgs,
    registry: &FeedRegistry,
    fetcher: &dyn ArticleFetcher,
) -> Result<()> {
    println!("{}", render(args, registry, fetcher).await?);
    Ok(())
}

async fn render(
    args: FeedArgs,
    registry: &FeedRegistry,
    fetcher: &dyn ArticleFetcher,
) -> Result<String> {
    match args.command {
        FeedCommands::List => {
            let mut out = String::from("Available feeds:");
            for source in registry.sources() {
                out.push_str(&format!("\n  {:<12} {:<12} {}", source.key, source.name, source.url));
            }
            Ok(out)
        }
        FeedCommands::Fetch { feed, limit, query } => {
            let source = registry.get(&feed)?;
            let mut articles = fetcher.fetch(source, limit.clamp(1, 100)).await?;
            if let Some(query) = query {
                articles = filter_articles(articles, &query);
            }
            Ok(serde_json::to_string_pretty(&articles)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FeedSource;
    use async_trait::async_trait;
    use nn_core::{Article, Error};

    struct StubFetcher;

    #[async_trait]
    impl ArticleFetcher for StubFetcher {
        async fn fetch(&self, source: &FeedSource, limit: usize) -> Result<Vec<Article>> {
            let articles = vec![
                Article::new("Bahnstreik legt Verkehr lahm", "").with_source(&source.name),
                Article::new("Waldbrand in Kalifornien", "").with_source(&source.name),
                Article::new("Bahn erhöht Preise", "").with_source(&source.name),
            ];
            Ok(articles.into_iter().take(limit).collect())
        }
    }

    fn fetch(feed: &str, limit: usize, query: Option<&str>) -> FeedArgs {
        FeedArgs {
            command: FeedCommands::Fetch {
                feed: feed.to_string(),
                limit,
                query: query.map(str::to_string),
            },
        }
    }

    #[tokio::test]
    async fn test_list() {
        let out = render(FeedArgs { command: FeedCommands::List }, &FeedRegistry::default(), &StubFetcher)
            .await
            .unwrap();
        assert!(out.starts_with("Available feeds:"));
        assert!(out.contains("tagesschau"));
        assert!(out.contains("https://www.srf.ch/news/bnf/rss/1646"));
    }

    #[tokio::test]
    async fn test_fetch_prints_json() {
        let out = render(fetch("SRF", 2, None), &FeedRegistry::default(), &StubFetcher)
            .await
            .unwrap();
        let articles: Vec<Article> = serde_json::from_str(&out).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source, "SRF");
    }

    #[tokio::test]
    async fn test_fetch_with_query() {
        let out = render(fetch("srf", 20, Some("bahn")), &FeedRegistry::default(), &StubFetcher)
            .await
            .unwrap();
        let articles: Vec<Article> = serde_json::from_str(&out).unwrap();
        assert_eq!(articles.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_unknown_feed() {
        let result = render(fetch("bild", 20, None), &FeedRegistry::default(), &StubFetcher).await;
        assert!(matches!(result, Err(Error::UnknownFeed(_))));
    }
}
