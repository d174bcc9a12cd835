use axum::{
    routing::{get, post, put},
    Router,
};

use super::{handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/feeds", put(handlers::create_feed).get(handlers::list_feeds))
        .route("/feeds/load", post(handlers::load_feed))
        .route("/feeds/{id}", get(handlers::get_feed))
        .route("/articles", get(handlers::list_articles))
        .route("/articles/{id}", get(handlers::get_article))
        .with_state(state)
}
