use std::path::Path;
use std::time::Duration;

use nn_core::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_LEFT: &str = "srf";
pub const DEFAULT_RIGHT: &str = "tagesschau";
pub const DEFAULT_USER_AGENT: &str = "NeutralNews/1.0 (+local test)";

/// A named RSS or Atom feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    /// Short identifier used on the command line and in the registry.
    pub key: String,
    /// Display name, copied into `Article::source`.
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(key: &str, name: &str, url: &str) -> Result<Self> {
        let source = Self {
            key: key.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        };
        source.validate()?;
        Ok(source)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "feed {} must use http(s), got {}",
                self.key,
                url.scheme()
            )));
        }
        Ok(())
    }
}

/// The feeds known to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRegistry {
    sources: Vec<FeedSource>,
}

impl Default for FeedRegistry {
    fn default() -> Self {
        let builtin = |key: &str, name: &str, url: &str| FeedSource {
            key: key.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        };
        Self {
            sources: vec![
                builtin("srf", "SRF", "https://www.srf.ch/news/bnf/rss/1646"),
                builtin("tagesschau", "Tagesschau", "https://www.tagesschau.de/index~rss2.xml"),
                builtin("nzz", "NZZ", "https://www.nzz.ch/recent.rss"),
                builtin("spiegel", "Spiegel", "https://www.spiegel.de/schlagzeilen/index.rss"),
            ],
        }
    }
}

impl FeedRegistry {
    pub fn new(mut sources: Vec<FeedSource>) -> Result<Self> {
        for source in sources.iter_mut() {
            source.key = source.key.trim().to_lowercase();
            source.validate()?;
        }
        for (i, source) in sources.iter().enumerate() {
            if sources[..i].iter().any(|s| s.key == source.key) {
                return Err(Error::Config(format!("duplicate feed key: {}", source.key)));
            }
        }
        Ok(Self { sources })
    }

    /// Reads a JSON array of `{key, name, url}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn get(&self, key: &str) -> Result<&FeedSource> {
        let key = key.trim().to_lowercase();
        self.sources
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| Error::UnknownFeed(key))
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }
}

/// HTTP settings for fetching feeds.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub limit: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            timeout: Duration::from_secs(12),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
