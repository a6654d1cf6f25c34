use async_trait::async_trait;
use nn_core::{Article, Error, Result};
use reqwest::Client;

use crate::filter::dedup;
use crate::logging::Logger;
use crate::parse::parse_feed;
use crate::sources::{FeedSource, FetchConfig};

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Returns at most `limit` deduplicated articles from `source`, in feed order.
    async fn fetch(&self, source: &FeedSource, limit: usize) -> Result<Vec<Article>>;
}

/// Fetches feeds over HTTP.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: FetchConfig,
}

impl FeedClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn download(&self, source: &FeedSource) -> Result<Vec<u8>> {
        let response = self.client.get(source.url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!("{} returned {}", source.url, status)));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ArticleFetcher for FeedClient {
    async fn fetch(&self, source: &FeedSource, limit: usize) -> Result<Vec<Article>> {
        let log = Logger::new().with_prefix(format!("[{}]", source.name));
        log.debug(&format!("📡 GET {}", source.url));

        let bytes = match self.download(source).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log.warn(&format!("❌ fetch failed: {}", e));
                return Err(e);
            }
        };

        let mut articles = dedup(parse_feed(&bytes, source)?);
        articles.truncate(limit);
        log.info(&format!("📰 {} articles", articles.len()));
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_config() {
        let client = FeedClient::new(FetchConfig::default()).unwrap();
        assert_eq!(client.config().limit, 20);
        assert_eq!(client.config().timeout.as_secs(), 12);
    }

    #[tokio::test]
    async fn test_unreachable_feed_is_an_error() {
        let client = FeedClient::new(FetchConfig {
            timeout: std::time::Duration::from_secs(1),
            ..FetchConfig::default()
        })
        .unwrap();
        let source = FeedSource::new("local", "Local", "http://127.0.0.1:9/feed.xml").unwrap();
        assert!(client.fetch(&source, 5).await.is_err());
    }
}
