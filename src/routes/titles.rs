use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult, models::SearchResults, routes::AppState, services::title_search,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    query: String,
    page: Option<u32>,
}

/// Handler for combined movie and TV search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResults>> {
    let page = params.page.unwrap_or(1).max(1);
    let results =
        title_search::search_media(state.catalog.as_ref(), &state.images, &params.query, page)
            .await?;
    Ok(Json(results))
}
