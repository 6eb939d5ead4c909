pub mod comics;
pub mod proxy;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::error::{Result, XkcdError};
use crate::models::ComicResponse;
use crate::sources::ComicSelector;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/comics/{comic}", get(comics::get_comic))
        .route("/api/comics/{comic}/text", get(comics::get_comic_text))
        .route("/api/comics/{comic}/image", get(proxy::proxy_image))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

pub(crate) async fn resolve_comic(
    state: &AppState,
    comic: &str,
) -> Result<(ComicSelector, ComicResponse)> {
    let selector: ComicSelector = comic.parse()?;
    let response = selector
        .fetch(state.source.as_ref())
        .await?
        .ok_or_else(|| XkcdError::NotFound(format!("no comic found for {}", selector)))?;
    Ok((selector, response))
}
