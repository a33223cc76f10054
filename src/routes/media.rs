use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MediaDetails, MediaKind},
    routes::AppState,
    services::browse,
};

/// Handler for movie detail endpoint
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> AppResult<Json<MediaDetails>> {
    let details = browse::details(state.catalog.as_ref(), &state.images, MediaKind::Movie, id).await?;
    Ok(Json(details))
}

/// Handler for TV show detail endpoint
pub async fn tv_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> AppResult<Json<MediaDetails>> {
    let details = browse::details(state.catalog.as_ref(), &state.images, MediaKind::Tv, id).await?;
    Ok(Json(details))
}
