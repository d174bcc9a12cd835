mod error;
mod handlers;
mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::errors::NewsResult;
use crate::services::Consumer;
use crate::storage::traits::{ArticleRepository, FeedRepository};

pub use error::ApiError;
pub use router::create_router;

/// Shared handles the handlers work against. Each store is one instance,
/// injected here and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub feeds: Arc<dyn FeedRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub consumer: Arc<dyn Consumer>,
}

impl AppState {
    pub fn new(
        feeds: Arc<dyn FeedRepository>,
        articles: Arc<dyn ArticleRepository>,
        consumer: Arc<dyn Consumer>,
    ) -> Self {
        Self {
            feeds,
            articles,
            consumer,
        }
    }
}

pub async fn serve(addr: SocketAddr, state: AppState) -> NewsResult<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
