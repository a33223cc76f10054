use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MediaKind, PagedResults},
    routes::{AppState, PageQuery},
    services::browse,
};

pub async fn popular_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<PagedResults>> {
    let results =
        browse::popular(state.catalog.as_ref(), &state.images, MediaKind::Movie, params.page())
            .await?;
    Ok(Json(results))
}

pub async fn popular_tv_shows(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<PagedResults>> {
    let results =
        browse::popular(state.catalog.as_ref(), &state.images, MediaKind::Tv, params.page())
            .await?;
    Ok(Json(results))
}

pub async fn documentaries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<PagedResults>> {
    let results = browse::documentaries(state.catalog.as_ref(), &state.images, params.page()).await?;
    Ok(Json(results))
}
