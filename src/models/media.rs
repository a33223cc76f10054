use serde::{Deserialize, Serialize};

use super::{ApiMediaDetails, ApiMediaResult, CatalogItem, CatalogPage, ImageUrls, MediaKind};

const MAX_CAST: usize = 10;
const MAX_VIDEOS: usize = 3;

/// Listing entry returned to the client for search, popular and discover
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MediaSummary {
    pub fn from_item(item: &CatalogItem, images: &ImageUrls) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            kind: item.kind,
            release_date: item.release_date.clone(),
            poster_path: images.poster(item.poster_path.as_deref()),
            overview: item.overview.clone(),
            vote_average: item.vote_average,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults {
    pub movies: Vec<MediaSummary>,
    #[serde(rename = "tvShows")]
    pub tv_shows: Vec<MediaSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResults {
    pub results: Vec<MediaSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl PagedResults {
    pub fn from_page(page: CatalogPage, images: &ImageUrls) -> Self {
        Self {
            results: page
                .items
                .iter()
                .map(|item| MediaSummary::from_item(item, images))
                .collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

impl Video {
    fn is_youtube_trailer(&self) -> bool {
        self.site == "YouTube" && matches!(self.video_type.as_str(), "Trailer" | "Teaser")
    }
}

/// Related title listed on a detail page
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedMedia {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub poster_path: Option<String>,
}

/// Detail page payload for a single movie or show
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetails {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<Season>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub recommendations: Vec<RelatedMedia>,
    pub videos: Vec<Video>,
}

impl MediaDetails {
    pub fn from_api(details: ApiMediaDetails, kind: MediaKind, images: &ImageUrls) -> Self {
        let item = details.summary.into_catalog_item(kind);
        let featured_jobs = kind.featured_crew_jobs();

        let (runtime, seasons, episodes) = match kind {
            MediaKind::Movie => (details.runtime, None, None),
            MediaKind::Tv => (
                None,
                Some(details.seasons.unwrap_or_default()),
                details.number_of_episodes,
            ),
        };

        Self {
            id: item.id,
            poster_path: images.poster(item.poster_path.as_deref()),
            backdrop_path: images.backdrop(item.backdrop_path.as_deref()),
            title: item.title,
            kind,
            release_date: item.release_date,
            overview: item.overview,
            vote_average: item.vote_average,
            runtime,
            seasons,
            episodes,
            genres: details.genres,
            cast: details.credits.cast.into_iter().take(MAX_CAST).collect(),
            crew: details
                .credits
                .crew
                .into_iter()
                .filter(|member| featured_jobs.contains(&member.job.as_str()))
                .collect(),
            recommendations: details
                .recommendations
                .results
                .into_iter()
                .map(|related| RelatedMedia::from_api(related, kind, images))
                .collect(),
            videos: details
                .videos
                .results
                .into_iter()
                .filter(Video::is_youtube_trailer)
                .take(MAX_VIDEOS)
                .collect(),
        }
    }
}

impl RelatedMedia {
    fn from_api(result: ApiMediaResult, kind: MediaKind, images: &ImageUrls) -> Self {
        let item = result.into_catalog_item(kind);
        Self {
            id: item.id,
            poster_path: images.poster(item.poster_path.as_deref()),
            title: item.title,
            kind,
        }
    }
}
