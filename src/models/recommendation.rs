use serde::{Deserialize, Deserializer, Serialize};

use super::{CatalogItem, ImageUrls, MediaKind};

/// A title suggested by the language model, not yet resolved against the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedRecommendation {
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
    pub kind: MediaKind,
}

impl GeneratedRecommendation {
    /// Catalog search string: `"{title} {year}"`, or just the title
    pub fn search_query(&self) -> String {
        match self.year.as_deref() {
            Some(year) => format!("{} {}", self.title, year),
            None => self.title.clone(),
        }
    }
}

/// Structured object the language model is asked to reply with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedRecommendations {
    pub movies: Vec<GeneratedRecommendation>,
    #[serde(rename = "tvShows")]
    pub tv_shows: Vec<GeneratedRecommendation>,
}

/// A generated recommendation merged with its best catalog match, if any
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub recommendation: GeneratedRecommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
}

impl EnrichedRecommendation {
    pub fn unmatched(recommendation: GeneratedRecommendation) -> Self {
        Self {
            id: None,
            recommendation,
            poster_path: None,
            vote_average: None,
        }
    }

    pub fn matched(
        recommendation: GeneratedRecommendation,
        item: &CatalogItem,
        images: &ImageUrls,
    ) -> Self {
        Self {
            id: Some(item.id),
            recommendation,
            poster_path: images.poster(item.poster_path.as_deref()),
            vote_average: Some(item.vote_average),
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.id.is_some()
    }
}

/// Final response of the recommendation pipeline
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationSet {
    pub query: String,
    pub movies: Vec<EnrichedRecommendation>,
    #[serde(rename = "tvShows")]
    pub tv_shows: Vec<EnrichedRecommendation>,
}

impl RecommendationSet {
    pub fn len(&self) -> usize {
        self.movies.len() + self.tv_shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Models answer with `"year": "2010"`, `"year": 2010` or nothing at all.
#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = match Option::<YearRepr>::deserialize(deserializer)? {
        Some(YearRepr::Text(text)) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Some(YearRepr::Integer(year)) => Some(year.to_string()),
        Some(YearRepr::Float(year)) => Some((year.trunc() as i64).to_string()),
        None => None,
    };
    Ok(year)
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<MediaKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let kind = match raw.trim().to_lowercase().as_str() {
        "tv" | "series" | "tv_series" | "show" | "tv show" => MediaKind::Tv,
        _ => MediaKind::Movie,
    };
    Ok(kind)
}
