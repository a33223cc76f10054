use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod image;
pub mod media;
pub mod recommendation;

pub use image::ImageUrls;
pub use media::{
    CastMember, CrewMember, Genre, MediaDetails, MediaSummary, PagedResults, RelatedMedia,
    SearchResults, Season, Video,
};
pub use recommendation::{
    EnrichedRecommendation, GeneratedRecommendation, GeneratedRecommendations, RecommendationSet,
};

/// Kind of catalog entry, doubles as the catalog path segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Query parameter the catalog uses to narrow a search by year
    pub fn year_param(&self) -> &'static str {
        match self {
            MediaKind::Movie => "year",
            MediaKind::Tv => "first_air_date_year",
        }
    }

    /// Crew jobs worth surfacing on a detail page
    pub fn featured_crew_jobs(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Movie => &["Director"],
            MediaKind::Tv => &["Creator", "Executive Producer"],
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A movie or TV show as returned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    pub kind: MediaKind,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
}

impl CatalogItem {
    /// Four-digit year prefix of the release (or first air) date
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }
}

/// One page of catalog results, in catalog ranking order
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub items: Vec<CatalogItem>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Entry of a TMDB result list (search, popular, discover, recommendations)
///
/// Movies carry `title`/`release_date`, shows carry `name`/`first_air_date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMediaResult {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

impl ApiMediaResult {
    pub fn into_catalog_item(self, kind: MediaKind) -> CatalogItem {
        let (title, release_date) = match kind {
            MediaKind::Movie => (self.title.or(self.name), self.release_date),
            MediaKind::Tv => (self.name.or(self.title), self.first_air_date),
        };

        CatalogItem {
            id: self.id,
            title: title.unwrap_or_default(),
            kind,
            release_date: release_date.filter(|d| !d.is_empty()),
            overview: self.overview.filter(|o| !o.is_empty()),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
        }
    }
}

/// Paged TMDB list response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage<T> {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn default_page() -> u32 {
    1
}

impl<T> Default for ApiPage<T> {
    fn default() -> Self {
        Self {
            page: default_page(),
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

impl ApiPage<ApiMediaResult> {
    pub fn into_catalog_page(self, kind: MediaKind) -> CatalogPage {
        CatalogPage {
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
            items: self
                .results
                .into_iter()
                .map(|r| r.into_catalog_item(kind))
                .collect(),
        }
    }
}

/// TMDB detail response with `append_to_response=credits,recommendations,videos`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMediaDetails {
    #[serde(flatten)]
    pub summary: ApiMediaResult,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub seasons: Option<Vec<Season>>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub credits: ApiCredits,
    #[serde(default)]
    pub recommendations: ApiPage<ApiMediaResult>,
    #[serde(default)]
    pub videos: ApiVideoList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiVideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_serialization() {
        assert_eq!(serde_json::to_string(&MediaKind::Movie).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&MediaKind::Tv).unwrap(), "\"tv\"");
        assert_eq!(format!("{}", MediaKind::Tv), "tv");
    }

    #[test]
    fn test_movie_result_to_catalog_item() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "overview": "Cobb, a skilled thief...",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "backdrop_path": null,
            "vote_average": 8.4
        }"#;

        let result: ApiMediaResult = serde_json::from_str(json).unwrap();
        let item = result.into_catalog_item(MediaKind::Movie);

        assert_eq!(item.id, 27205);
        assert_eq!(item.title, "Inception");
        assert_eq!(item.kind, MediaKind::Movie);
        assert_eq!(item.release_year(), Some("2010"));
        assert_eq!(item.poster_path.as_deref(), Some("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"));
        assert_eq!(item.backdrop_path, None);
        assert_eq!(item.vote_average, 8.4);
    }

    #[test]
    fn test_tv_result_uses_name_and_first_air_date() {
        let json = r#"{
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "vote_average": 8.9
        }"#;

        let result: ApiMediaResult = serde_json::from_str(json).unwrap();
        let item = result.into_catalog_item(MediaKind::Tv);

        assert_eq!(item.title, "Breaking Bad");
        assert_eq!(item.release_date.as_deref(), Some("2008-01-20"));
        assert_eq!(item.release_year(), Some("2008"));
        assert_eq!(item.overview, None);
    }

    #[test]
    fn test_empty_release_date_is_absent() {
        let result = ApiMediaResult {
            id: 1,
            title: Some("Untitled".to_string()),
            release_date: Some(String::new()),
            ..Default::default()
        };

        let item = result.into_catalog_item(MediaKind::Movie);
        assert_eq!(item.release_date, None);
        assert_eq!(item.release_year(), None);
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: ApiPage<ApiMediaResult> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        let page = page.into_catalog_page(MediaKind::Movie);

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_preserves_catalog_order() {
        let json = r#"{
            "page": 2,
            "total_pages": 10,
            "total_results": 200,
            "results": [
                {"id": 3, "title": "C"},
                {"id": 1, "title": "A"},
                {"id": 2, "title": "B"}
            ]
        }"#;

        let page: ApiPage<ApiMediaResult> = serde_json::from_str(json).unwrap();
        let page = page.into_catalog_page(MediaKind::Movie);

        let ids: Vec<u64> = page.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_results, 200);
    }
}
