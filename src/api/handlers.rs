use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::{Article, Feed};
use crate::storage::ArticleQuery;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateFeedArgs {
    pub provider: String,
    pub category: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadFeedArgs {
    pub id: String,
}

pub async fn create_feed(
    State(state): State<AppState>,
    payload: Result<Json<CreateFeedArgs>, JsonRejection>,
) -> Result<Json<Option<Arc<Feed>>>, ApiError> {
    let Json(args) = payload.map_err(|_| ApiError::invalid_arguments())?;
    if args.provider.is_empty() || args.category.is_empty() || args.address.is_empty() {
        return Err(ApiError::invalid_arguments());
    }

    let feed = state
        .feeds
        .create(Some(Feed::new(args.provider, args.category, args.address)))?;
    Ok(Json(feed))
}

pub async fn list_feeds(State(state): State<AppState>) -> Result<Json<Vec<Arc<Feed>>>, ApiError> {
    Ok(Json(state.feeds.list()?))
}

pub async fn get_feed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Arc<Feed>>, ApiError> {
    Ok(Json(state.feeds.get(&id)?))
}

/// Pull the feed's current entries into the article store.
pub async fn load_feed(
    State(state): State<AppState>,
    payload: Result<Json<LoadFeedArgs>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(args) = payload.map_err(|_| ApiError::invalid_arguments())?;
    if args.id.is_empty() {
        return Err(ApiError::invalid_arguments());
    }
    let feed = state.feeds.get(&args.id)?;

    let consumer = Arc::clone(&state.consumer);
    let loaded = tokio::task::spawn_blocking(move || consumer.consume(&feed))
        .await
        .map_err(|e| ApiError::Internal(format!("feed load aborted: {e}")))??;

    Ok(Json(json!({ "loaded": loaded })))
}

pub async fn list_articles(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<Arc<Article>>>, ApiError> {
    let query = parse_article_query(raw.as_deref().unwrap_or_default())?;
    Ok(Json(state.articles.list(&query)?))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Arc<Article>>, ApiError> {
    Ok(Json(state.articles.get(&id)?))
}

/// `c` is the cursor, `pageSize` the page length, `feed` the feed id, and
/// `cat` may repeat once per category.
fn parse_article_query(raw: &str) -> Result<ArticleQuery, ApiError> {
    let mut query = ArticleQuery::new();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "c" => query.cursor = value.into_owned(),
            "pageSize" => {
                query.page_size = value.parse().map_err(|_| ApiError::invalid_arguments())?
            }
            "feed" => query.feed = value.into_owned(),
            "cat" => query.categories.push(value.into_owned()),
            _ => {}
        }
    }
    Ok(query)
}
