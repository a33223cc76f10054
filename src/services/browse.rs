use crate::{
    error::AppResult,
    models::{ImageUrls, MediaDetails, MediaKind, PagedResults},
    services::providers::CatalogProvider,
};

/// TMDB genre id for documentaries
pub const DOCUMENTARY_GENRE_ID: u32 = 99;

pub async fn popular(
    catalog: &dyn CatalogProvider,
    images: &ImageUrls,
    kind: MediaKind,
    page: u32,
) -> AppResult<PagedResults> {
    let page = catalog.popular(kind, page).await?;
    Ok(PagedResults::from_page(page, images))
}

pub async fn documentaries(
    catalog: &dyn CatalogProvider,
    images: &ImageUrls,
    page: u32,
) -> AppResult<PagedResults> {
    let page = catalog
        .discover(MediaKind::Movie, DOCUMENTARY_GENRE_ID, page)
        .await?;

    let mut results = PagedResults::from_page(page, images);
    results.results = results
        .results
        .into_iter()
        .map(|summary| summary.with_category("documentary"))
        .collect();

    Ok(results)
}

pub async fn details(
    catalog: &dyn CatalogProvider,
    images: &ImageUrls,
    kind: MediaKind,
    id: u64,
) -> AppResult<MediaDetails> {
    let details = catalog.details(kind, id).await?;
    Ok(MediaDetails::from_api(details, kind, images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ApiMediaDetails, CatalogItem, CatalogPage};
    use crate::services::providers::MockCatalogProvider;
    use mockall::predicate::eq;

    fn images() -> ImageUrls {
        ImageUrls::new("https://image.tmdb.org/t/p")
    }

    fn catalog_page(kind: MediaKind, page: u32) -> CatalogPage {
        CatalogPage {
            page,
            total_pages: 42,
            total_results: 840,
            items: vec![CatalogItem {
                id: 7,
                title: "Free Solo".to_string(),
                kind,
                release_date: Some("2018-08-31".to_string()),
                overview: Some("Alex Honnold".to_string()),
                poster_path: Some("/solo.jpg".to_string()),
                backdrop_path: None,
                vote_average: 7.9,
            }],
        }
    }

    #[tokio::test]
    async fn test_popular_keeps_paging_metadata() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_popular()
            .with(eq(MediaKind::Tv), eq(3u32))
            .times(1)
            .returning(|kind, page| Ok(catalog_page(kind, page)));

        let results = popular(&catalog, &images(), MediaKind::Tv, 3).await.unwrap();

        assert_eq!(results.page, 3);
        assert_eq!(results.total_pages, 42);
        assert_eq!(results.total_results, 840);
        assert_eq!(results.results[0].kind, MediaKind::Tv);
        assert_eq!(results.results[0].category, None);
    }

    #[tokio::test]
    async fn test_documentaries_use_genre_and_category() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_discover()
            .with(eq(MediaKind::Movie), eq(DOCUMENTARY_GENRE_ID), eq(1u32))
            .times(1)
            .returning(|kind, _, page| Ok(catalog_page(kind, page)));

        let results = documentaries(&catalog, &images(), 1).await.unwrap();

        assert_eq!(results.results.len(), 1);
        assert_eq!(results.results[0].category.as_deref(), Some("documentary"));
        assert_eq!(
            results.results[0].poster_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/solo.jpg")
        );
    }

    #[tokio::test]
    async fn test_details_reshapes_catalog_record() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_details()
            .with(eq(MediaKind::Movie), eq(550u64))
            .times(1)
            .returning(|_, id| {
                let raw: ApiMediaDetails = serde_json::from_value(serde_json::json!({
                    "id": id,
                    "title": "Fight Club",
                    "runtime": 139,
                    "backdrop_path": "/fc.jpg"
                }))
                .unwrap();
                Ok(raw)
            });

        let record = details(&catalog, &images(), MediaKind::Movie, 550).await.unwrap();

        assert_eq!(record.title, "Fight Club");
        assert_eq!(record.runtime, Some(139));
        assert_eq!(
            record.backdrop_path.as_deref(),
            Some("https://image.tmdb.org/t/p/original/fc.jpg")
        );
        assert!(record.cast.is_empty());
    }

    #[tokio::test]
    async fn test_details_not_found_propagates() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_details()
            .returning(|_, id| Err(AppError::NotFound(format!("/tv/{}", id))));

        let result = details(&catalog, &images(), MediaKind::Tv, 1).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
