use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use nn_core::{Article, Group, Result};
use nn_feeds::{
    handle_command, init_logging, ArticleFetcher, FeedArgs, FeedClient, FeedCommands,
    FeedRegistry, FetchConfig, DEFAULT_LEFT, DEFAULT_RIGHT,
};
use nn_matcher::{match_pairs, MatchConfig};
use nn_web::{create_app, AppState};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "info", help = "Log level: error, warn, info, debug, trace")]
    log_level: Level,
    /// JSON file with `[{key, name, url}]` entries replacing the built-in feeds
    #[arg(long)]
    feeds: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct Tuning {
    /// Minimum score for pairing two articles
    #[arg(long)]
    threshold: Option<f64>,
    /// Bonus for articles sharing a tag
    #[arg(long)]
    tag_bonus: Option<f64>,
}

impl Tuning {
    fn apply(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(tag_bonus) = self.tag_bonus {
            config = config.with_tag_bonus(tag_bonus);
        }
        config
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: String,
        #[arg(long, default_value = DEFAULT_LEFT)]
        left: String,
        #[arg(long, default_value = DEFAULT_RIGHT)]
        right: String,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// List configured feeds
    Feeds,
    /// Fetch one feed and print its articles as JSON
    Fetch {
        feed: String,
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Fetch two feeds and group their articles by topic
    Pair {
        #[arg(long, default_value = DEFAULT_LEFT)]
        left: String,
        #[arg(long, default_value = DEFAULT_RIGHT)]
        right: String,
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
        #[arg(short, long)]
        query: Option<String>,
        #[command(flatten)]
        tuning: Tuning,
        /// Print groups as JSON
        #[arg(long)]
        json: bool,
    },
    /// Group two JSON article files offline
    Match {
        #[arg(long)]
        left: PathBuf,
        #[arg(long)]
        right: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
        /// Minimum score for adding a leftover article to a group
        #[arg(long)]
        fit_threshold: Option<f64>,
    },
}

fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(serde_json::from_str(&json)?)
}

fn render_groups(groups: &[Group]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "== {} ({} | {})\n",
            group.topic,
            group.left.len(),
            group.right.len()
        ));
        for article in &group.left {
            out.push_str(&format!("  < [{}] {}\n", article.source, article.title));
        }
        for article in &group.right {
            out.push_str(&format!("  > [{}] {}\n", article.source, article.title));
        }
    }
    out
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let registry = match &cli.feeds {
        Some(path) => FeedRegistry::from_json_file(path)?,
        None => FeedRegistry::default(),
    };

    match cli.command {
        Commands::Serve { addr, left, right, tuning } => {
            let fetcher = Arc::new(FeedClient::new(FetchConfig::default())?);
            let (left_source, right_source) =
                (registry.get(&left)?.clone(), registry.get(&right)?.clone());
            let state = AppState::new(fetcher, left_source, right_source)
                .with_match_config(tuning.apply(MatchConfig::default()));
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🌐 Listening on http://{} ({} vs {})", addr, left, right);
            axum::serve(listener, create_app(state)).await?;
        }
        Commands::Feeds => {
            let fetcher = FeedClient::new(FetchConfig::default())?;
            let args = FeedArgs { command: FeedCommands::List };
            handle_command(args, &registry, &fetcher).await?;
        }
        Commands::Fetch { feed, limit, query } => {
            let fetcher = FeedClient::new(FetchConfig::default())?;
            let args = FeedArgs {
                command: FeedCommands::Fetch { feed, limit, query },
            };
            handle_command(args, &registry, &fetcher).await?;
        }
        Commands::Pair { left, right, limit, query, tuning, json } => {
            let fetcher = FeedClient::new(FetchConfig::default())?;
            let (left, right) = (registry.get(&left)?, registry.get(&right)?);
            let limit = limit.clamp(1, 100);
            let (mut left, mut right) =
                futures::try_join!(fetcher.fetch(left, limit), fetcher.fetch(right, limit))?;
            if let Some(query) = query.as_deref() {
                left = nn_feeds::filter_articles(left, query);
                right = nn_feeds::filter_articles(right, query);
            }

            let groups = match_pairs(&left, &right, &tuning.apply(MatchConfig::default()));
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                print!("{}", render_groups(&groups));
            }
        }
        Commands::Match { left, right, tuning, fit_threshold } => {
            let (left, right) = (load_articles(&left)?, load_articles(&right)?);
            let mut config = tuning.apply(MatchConfig::default());
            if let Some(fit_threshold) = fit_threshold {
                config = config.with_fit_threshold(fit_threshold);
            }
            info!("🧩 Matching {} left and {} right articles", left.len(), right.len());
            let groups = match_pairs(&left, &right, &config);
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }

    Ok(())
}
