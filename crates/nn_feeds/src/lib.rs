//! Feed sources, RSS/Atom parsing and the HTTP client that turns them into articles.

pub mod cli;
pub mod client;
pub mod filter;
pub mod logging;
pub mod parse;
pub mod sources;

pub use cli::{handle_command, FeedArgs, FeedCommands};
pub use client::{ArticleFetcher, FeedClient};
pub use filter::{dedup, filter_articles};
pub use logging::{init_logging, Logger};
pub use parse::parse_feed;
pub use sources::{FeedRegistry, FeedSource, FetchConfig, DEFAULT_LEFT, DEFAULT_RIGHT};

pub mod prelude {
    pub use super::client::ArticleFetcher;
    pub use super::sources::{FeedRegistry, FeedSource};
    pub use nn_core::{Article, Error, Result};
}
