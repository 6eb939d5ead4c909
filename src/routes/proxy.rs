use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::AppState;
use crate::error::Result;
use crate::routes::resolve_comic;

pub async fn proxy_image(
    State(state): State<Arc<AppState>>,
    Path(comic): Path<String>,
) -> Result<impl IntoResponse> {
    let (selector, response) = resolve_comic(&state, &comic).await?;

    let (bytes, content_type) = state.source.fetch_image(&response.img).await?;

    let cache_control = if selector.is_random() {
        "no-store"
    } else {
        "public, max-age=86400"
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, cache_control.to_string()),
        ],
        bytes,
    ))
}
