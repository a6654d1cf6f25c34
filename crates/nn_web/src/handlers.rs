use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use nn_core::Article;
use nn_feeds::filter_articles;
use nn_matcher::match_pairs;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;
const HEALTH_SAMPLE: usize = 3;

#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub threshold: Option<f64>,
    pub tag_bonus: Option<f64>,
}

impl FeedQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    fn filter(&self, articles: Vec<Article>) -> Vec<Article> {
        match self.q.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => filter_articles(articles, q),
            _ => articles,
        }
    }
}

async fn fetch_both(
    state: &AppState,
    limit: usize,
) -> Result<(Vec<Article>, Vec<Article>), ApiError> {
    let (left, right) = futures::try_join!(
        state.fetcher.fetch(&state.left, limit),
        state.fetcher.fetch(&state.right, limit)
    )?;
    Ok((left, right))
}

pub async fn list_feeds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Value>, ApiError> {
    let (left, right) = fetch_both(&state, query.limit()).await?;
    let mut data = serde_json::Map::new();
    data.insert(state.left.key.clone(), json!(query.filter(left)));
    data.insert(state.right.key.clone(), json!(query.filter(right)));
    Ok(Json(json!({"ok": true, "data": data})))
}

pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Value>, ApiError> {
    let (left, right) = fetch_both(&state, query.limit()).await?;
    let (left, right) = (query.filter(left), query.filter(right));

    let mut config = state.match_config.clone();
    if let Some(threshold) = query.threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(tag_bonus) = query.tag_bonus {
        config = config.with_tag_bonus(tag_bonus);
    }

    let groups = match_pairs(&left, &right, &config);
    tracing::info!(
        "🧩 {} groups from {} + {} articles",
        groups.len(),
        left.len(),
        right.len()
    );
    Ok(Json(json!({"ok": true, "data": groups})))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let (left, right) = fetch_both(&state, HEALTH_SAMPLE).await?;
    let titles =
        |articles: &[Article]| articles.iter().map(|a| a.title.clone()).collect::<Vec<_>>();
    Ok(Json(json!({
        "ok": true,
        "left_count": left.len(),
        "right_count": right.len(),
        "samples": {
            "left": titles(&left),
            "right": titles(&right),
        }
    })))
}
