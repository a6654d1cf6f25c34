//! Topic grouping for two lists of news articles.
//!
//! Articles are reduced to canonical token sets, left articles are paired
//! greedily with their best qualifying right article, leftovers are
//! absorbed into existing groups, and every group gets a topic label.

pub mod config;
pub mod label;
pub mod matcher;
pub mod normalize;
pub mod profile;
pub mod similarity;
pub mod vocab;

pub use config::MatchConfig;
pub use label::{final_order, topic_label};
pub use matcher::{match_pairs, Matcher};
pub use normalize::{canonicalize, light_stem, normalize, tokenize};
pub use profile::TokenProfile;
pub use similarity::{score, Candidate, Gate, Score};

pub mod prelude {
    pub use super::{match_pairs, MatchConfig, Matcher, TokenProfile};
    pub use nn_core::{Article, Group, Side};
}
