use std::sync::Arc;

use crate::{
    models::{CatalogItem, EnrichedRecommendation, GeneratedRecommendation, ImageUrls, MediaKind},
    services::providers::CatalogProvider,
};

/// Leading results scanned for an exact release-year match
const YEAR_MATCH_WINDOW: usize = 5;

/// Resolves one generated recommendation against the catalog
///
/// A failed lookup or an empty result list leaves the item as it was; a miss
/// never fails the surrounding request.
pub async fn enrich(
    catalog: &dyn CatalogProvider,
    images: &ImageUrls,
    kind: MediaKind,
    item: GeneratedRecommendation,
) -> EnrichedRecommendation {
    let query = item.search_query();

    let results = match catalog.search(kind, &query, None, 1).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(
                error = %e,
                kind = %kind,
                title = %item.title,
                provider = catalog.name(),
                "Catalog lookup failed, keeping recommendation unenriched"
            );
            return EnrichedRecommendation::unmatched(item);
        }
    };

    match best_match(&results, item.year.as_deref()) {
        Some(found) => EnrichedRecommendation::matched(item, found, images),
        None => {
            tracing::debug!(kind = %kind, title = %item.title, "No catalog match");
            EnrichedRecommendation::unmatched(item)
        }
    }
}

/// Picks the catalog entry a recommendation refers to
///
/// The first result wins unless one of the leading results was released in
/// exactly the requested year.
pub fn best_match<'a>(results: &'a [CatalogItem], year: Option<&str>) -> Option<&'a CatalogItem> {
    year.and_then(|year| {
        results
            .iter()
            .take(YEAR_MATCH_WINDOW)
            .find(|candidate| candidate.release_year() == Some(year))
    })
    .or_else(|| results.first())
}

/// Enriches every item concurrently, returning them in input order
pub async fn enrich_all(
    catalog: Arc<dyn CatalogProvider>,
    images: &ImageUrls,
    kind: MediaKind,
    items: Vec<GeneratedRecommendation>,
) -> Vec<EnrichedRecommendation> {
    let mut tasks = Vec::with_capacity(items.len());

    for item in items {
        let catalog = catalog.clone();
        let images = images.clone();
        let fallback = item.clone();
        let task =
            tokio::spawn(async move { enrich(catalog.as_ref(), &images, kind, item).await });
        tasks.push((task, fallback));
    }

    let mut enriched = Vec::with_capacity(tasks.len());

    // Joined in spawn order, so positions match the input regardless of which
    // lookup finishes first
    for (task, fallback) in tasks {
        match task.await {
            Ok(item) => enriched.push(item),
            Err(e) => {
                tracing::error!(error = %e, title = %fallback.title, "Enrichment task join error");
                enriched.push(EnrichedRecommendation::unmatched(fallback));
            }
        }
    }

    let matched = enriched.iter().filter(|e| e.is_enriched()).count();
    tracing::info!(
        kind = %kind,
        total = enriched.len(),
        matched = matched,
        "Enrichment completed"
    );

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCatalogProvider;
    use mockall::predicate::{always, eq};
    use std::time::Duration;

    fn images() -> ImageUrls {
        ImageUrls::new("https://image.tmdb.org/t/p")
    }

    fn generated(title: &str, year: Option<&str>) -> GeneratedRecommendation {
        GeneratedRecommendation {
            title: title.to_string(),
            year: year.map(str::to_string),
            reason: format!("{} is great", title),
            kind: MediaKind::Movie,
        }
    }

    fn catalog_item(id: u64, title: &str, date: Option<&str>, poster: Option<&str>) -> CatalogItem {
        CatalogItem {
            id,
            title: title.to_string(),
            kind: MediaKind::Movie,
            release_date: date.map(str::to_string),
            overview: None,
            poster_path: poster.map(str::to_string),
            backdrop_path: None,
            vote_average: 7.5,
        }
    }

    #[tokio::test]
    async fn test_enrich_searches_title_and_year() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .with(eq(MediaKind::Movie), eq("Amélie 2001"), eq(None::<u32>), eq(1u32))
            .times(1)
            .returning(|_, _, _, _| {
                Ok(vec![catalog_item(194, "Amélie", Some("2001-04-25"), Some("/a.jpg"))])
            });
        catalog.expect_name().return_const("mock");

        let enriched = enrich(&catalog, &images(), MediaKind::Movie, generated("Amélie", Some("2001"))).await;

        assert_eq!(enriched.id, Some(194));
        assert_eq!(
            enriched.poster_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/a.jpg")
        );
        assert_eq!(enriched.vote_average, Some(7.5));
        assert_eq!(enriched.recommendation.reason, "Amélie is great");
    }

    #[tokio::test]
    async fn test_enrich_without_results_passes_item_through() {
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_search().returning(|_, _, _, _| Ok(vec![]));
        catalog.expect_name().return_const("mock");

        let item = generated("Nonexistent Film", None);
        let enriched = enrich(&catalog, &images(), MediaKind::Movie, item.clone()).await;

        assert_eq!(enriched, EnrichedRecommendation::unmatched(item));
    }

    #[tokio::test]
    async fn test_enrich_lookup_failure_passes_item_through() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .returning(|_, _, _, _| Err(AppError::ExternalApi("timeout".to_string())));
        catalog.expect_name().return_const("mock");

        let enriched = enrich(&catalog, &images(), MediaKind::Tv, generated("Dark", Some("2017"))).await;

        assert!(!enriched.is_enriched());
        assert_eq!(enriched.poster_path, None);
        assert_eq!(enriched.vote_average, None);
    }

    #[test]
    fn test_best_match_defaults_to_first_result() {
        let results = vec![
            catalog_item(1, "Heat", Some("1995-12-15"), None),
            catalog_item(2, "Heat", Some("1986-01-01"), None),
        ];

        assert_eq!(best_match(&results, None).map(|i| i.id), Some(1));
        assert_eq!(best_match(&results, Some("2020")).map(|i| i.id), Some(1));
        assert!(best_match(&[], Some("1995")).is_none());
    }

    #[test]
    fn test_best_match_prefers_exact_year_within_window() {
        let mut results: Vec<CatalogItem> = (1..=6)
            .map(|i| catalog_item(i, "Remake", Some("2000-01-01"), None))
            .collect();
        results[2].release_date = Some("1976-06-01".to_string());
        results[5].release_date = Some("1960-06-01".to_string());

        assert_eq!(best_match(&results, Some("1976")).map(|i| i.id), Some(3));
        // Beyond the window the first result still wins
        assert_eq!(best_match(&results, Some("1960")).map(|i| i.id), Some(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_enrich_all_preserves_order_with_out_of_order_completion() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search()
            .with(eq(MediaKind::Movie), always(), eq(None::<u32>), eq(1u32))
            .times(3)
            .returning(|_, query, _, _| {
                let (id, delay) = match query {
                    "A" => (1, 60),
                    "B" => (2, 30),
                    _ => (3, 0),
                };
                std::thread::sleep(Duration::from_millis(delay));
                Ok(vec![catalog_item(id, query, None, Some("/p.jpg"))])
            });
        catalog.expect_name().return_const("mock");

        let items = vec![generated("A", None), generated("B", None), generated("C", None)];
        let enriched = enrich_all(Arc::new(catalog), &images(), MediaKind::Movie, items).await;

        let titles: Vec<&str> = enriched.iter().map(|e| e.recommendation.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        let ids: Vec<Option<u64>> = enriched.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn test_enrich_all_isolates_failures() {
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_search().returning(|_, query, _, _| match query {
            "B" => Err(AppError::ExternalApi("boom".to_string())),
            other => Ok(vec![catalog_item(other.len() as u64, other, None, Some("/x.jpg"))]),
        });
        catalog.expect_name().return_const("mock");

        let items = vec![generated("A", None), generated("B", None), generated("CC", None)];
        let enriched = enrich_all(Arc::new(catalog), &images(), MediaKind::Movie, items).await;

        assert_eq!(enriched.len(), 3);
        assert!(enriched[0].is_enriched());
        assert!(!enriched[1].is_enriched());
        assert_eq!(enriched[1].recommendation.title, "B");
        assert!(enriched[2].is_enriched());
        assert_eq!(enriched[2].id, Some(2));
    }

    #[tokio::test]
    async fn test_enrich_all_empty_input() {
        let catalog = MockCatalogProvider::new();
        let enriched = enrich_all(Arc::new(catalog), &images(), MediaKind::Tv, vec![]).await;
        assert!(enriched.is_empty());
    }
}
