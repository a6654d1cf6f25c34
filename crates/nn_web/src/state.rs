use std::sync::Arc;

use nn_feeds::{ArticleFetcher, FeedSource};
use nn_matcher::MatchConfig;

/// Shared by every request.
pub struct AppState {
    pub fetcher: Arc<dyn ArticleFetcher>,
    pub left: FeedSource,
    pub right: FeedSource,
    pub match_config: MatchConfig,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn ArticleFetcher>, left: FeedSource, right: FeedSource) -> Self {
        Self {
            fetcher,
            left,
            right,
            match_config: MatchConfig::default(),
        }
    }

    pub fn with_match_config(mut self, match_config: MatchConfig) -> Self {
        self.match_config = match_config;
        self
    }
}
