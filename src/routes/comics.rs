use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::AppState;
use crate::error::Result;
use crate::routes::resolve_comic;

pub async fn get_comic(
    State(state): State<Arc<AppState>>,
    Path(comic): Path<String>,
) -> Result<impl IntoResponse> {
    let (_, response) = resolve_comic(&state, &comic).await?;
    let body = response.to_comic().to_json()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub async fn get_comic_text(
    State(state): State<Arc<AppState>>,
    Path(comic): Path<String>,
) -> Result<impl IntoResponse> {
    let (_, response) = resolve_comic(&state, &comic).await?;
    let body = response.to_comic().pretty_string();
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
