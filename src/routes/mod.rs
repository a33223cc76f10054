use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

pub mod browse;
pub mod media;
pub mod recommendations;
pub mod state;
pub mod titles;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", post(recommendations::recommend))
        .route("/search", get(titles::search))
        .route("/movie/:id", get(media::movie_details))
        .route("/tv/:id", get(media::tv_details))
        .route("/movies/popular", get(browse::popular_movies))
        .route("/tv/popular", get(browse::popular_tv_shows))
        .route("/documentaries", get(browse::documentaries))
}

/// `?page=` parameter shared by the listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

impl PageQuery {
    /// Requested page, 1-based; missing or zero means the first page
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the movie and TV show recommendation API" }))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::request_id::REQUEST_ID_HEADER;
    use crate::models::ImageUrls;
    use crate::services::{providers::MockCatalogProvider, RecommendationGenerator};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn router() -> Router {
        let state = AppState::new(
            Arc::new(MockCatalogProvider::new()),
            RecommendationGenerator::default(),
            ImageUrls::new("https://image.tmdb.org/t/p"),
        );
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_generates_request_id() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = router()
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_page_query_defaults() {
        assert_eq!(PageQuery::default().page(), 1);
        assert_eq!(PageQuery { page: Some(0) }.page(), 1);
        assert_eq!(PageQuery { page: Some(4) }.page(), 4);
    }
}
