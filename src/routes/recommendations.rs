use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationSet,
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub query: String,
}

/// Handler for AI recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationSet>> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection,
            "Rejected recommendation body"
        );
        AppError::InvalidInput(format!(
            "Expected a JSON body with a query: {}",
            rejection.body_text()
        ))
    })?;

    tracing::info!(
        request_id = %request_id,
        query = %request.query,
        "Processing recommendation request"
    );

    let result = recommendations::generate_recommendations(
        state.catalog.clone(),
        &state.generator,
        &state.images,
        &request.query,
    )
    .await;

    match result {
        Ok(set) => {
            tracing::info!(
                request_id = %request_id,
                movies = set.movies.len(),
                tv_shows = set.tv_shows.len(),
                "Recommendations completed"
            );
            Ok(Json(set))
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Recommendation request failed");
            Err(e)
        }
    }
}
