use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{ImageUrls, MediaKind, RecommendationSet},
    services::{
        enrichment::enrich_all,
        generator::{not_configured, RecommendationGenerator},
        prompt,
        providers::CatalogProvider,
    },
};

/// Generates AI recommendations for a free-text request
///
/// Preparation (validation, popular-title context, generation, parsing) is all
/// or nothing: the first failure aborts the request with its own error kind.
/// Enrichment afterwards is best effort per item.
pub async fn generate_recommendations(
    catalog: Arc<dyn CatalogProvider>,
    generator: &RecommendationGenerator,
    images: &ImageUrls,
    query: &str,
) -> AppResult<RecommendationSet> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("A query is required".to_string()));
    }

    if !generator.is_available() {
        return Err(not_configured());
    }

    let (popular_movies, popular_tv_shows) = tokio::try_join!(
        catalog.popular(MediaKind::Movie, 1),
        catalog.popular(MediaKind::Tv, 1)
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch popular titles for prompt context");
        e
    })?;

    let instructions = prompt::build(&popular_movies.items, &popular_tv_shows.items);

    let generated = generator.generate(query, &instructions).await?;

    let (movies, tv_shows) = tokio::join!(
        enrich_all(catalog.clone(), images, MediaKind::Movie, generated.movies),
        enrich_all(catalog, images, MediaKind::Tv, generated.tv_shows)
    );

    Ok(RecommendationSet {
        query: query.to_string(),
        movies,
        tv_shows,
    })
}
