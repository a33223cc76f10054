//! TMDB (The Movie Database) v3 provider
//!
//! Every request carries the API key and the configured locale as query
//! parameters. Result lists are passed through in TMDB's ranking order.
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{ApiMediaDetails, ApiMediaResult, ApiPage, CatalogItem, CatalogPage, MediaKind},
    services::providers::CatalogProvider,
};

const DETAIL_APPENDS: &str = "credits,recommendations,videos";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    /// Issues a GET against `path` with the key and locale attached
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key
                let e = e.without_url();
                tracing::error!(error = %e, path = %path, "TMDB request failed");
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                path = %path,
                status = %status,
                body = %body,
                "TMDB API request failed"
            );
            return Err(status_error(status, path));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(error = %e, path = %path, "TMDB response could not be decoded");
            AppError::from(e)
        })
    }

    async fn get_page(
        &self,
        kind: MediaKind,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<CatalogPage> {
        let page: ApiPage<ApiMediaResult> = self.get(path, params).await?;
        Ok(page.into_catalog_page(kind))
    }
}

/// Maps a non-2xx catalog response to the matching error kind
///
/// The response body is only logged, never returned to clients.
fn status_error(status: StatusCode, path: &str) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(format!("No catalog entry at {}", path)),
        _ => AppError::ExternalApi(format!("TMDB API returned status {}", status)),
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        year: Option<u32>,
        page: u32,
    ) -> AppResult<Vec<CatalogItem>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let mut params = vec![("query", query.to_string()), ("page", page.to_string())];
        if let Some(year) = year {
            params.push((kind.year_param(), year.to_string()));
        }

        let page = self
            .get_page(kind, &format!("/search/{}", kind), &params)
            .await?;

        tracing::info!(
            kind = %kind,
            query = %query,
            results = page.items.len(),
            provider = "tmdb",
            "Catalog search completed"
        );

        Ok(page.items)
    }

    async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<CatalogPage> {
        let page = self
            .get_page(kind, &format!("/{}/popular", kind), &[("page", page.to_string())])
            .await?;

        tracing::info!(
            kind = %kind,
            page = page.page,
            results = page.items.len(),
            provider = "tmdb",
            "Popular titles fetched"
        );

        Ok(page)
    }

    async fn discover(&self, kind: MediaKind, genre_id: u32, page: u32) -> AppResult<CatalogPage> {
        let page = self
            .get_page(
                kind,
                &format!("/discover/{}", kind),
                &[
                    ("page", page.to_string()),
                    ("with_genres", genre_id.to_string()),
                ],
            )
            .await?;

        tracing::info!(
            kind = %kind,
            genre_id = genre_id,
            results = page.items.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(page)
    }

    async fn details(&self, kind: MediaKind, id: u64) -> AppResult<ApiMediaDetails> {
        let details: ApiMediaDetails = self
            .get(
                &format!("/{}/{}", kind, id),
                &[("append_to_response", DETAIL_APPENDS.to_string())],
            )
            .await?;

        tracing::info!(
            kind = %kind,
            id = id,
            provider = "tmdb",
            "Details fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
