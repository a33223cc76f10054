use crate::{
    error::{AppError, AppResult},
    models::{ImageUrls, MediaKind, MediaSummary, SearchResults},
    services::providers::CatalogProvider,
};

/// Searches movies and shows at once
///
/// Both lookups run concurrently; either failing fails the search.
pub async fn search_media(
    catalog: &dyn CatalogProvider,
    images: &ImageUrls,
    query: &str,
    page: u32,
) -> AppResult<SearchResults> {
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "A search term is required".to_string(),
        ));
    }

    let (movies, tv_shows) = tokio::try_join!(
        catalog.search(MediaKind::Movie, query, None, page),
        catalog.search(MediaKind::Tv, query, None, page)
    )?;

    Ok(SearchResults {
        movies: movies
            .iter()
            .map(|item| MediaSummary::from_item(item, images))
            .collect(),
        tv_shows: tv_shows
            .iter()
            .map(|item| MediaSummary::from_item(item, images))
            .collect(),
    })
}
