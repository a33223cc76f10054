//! Upstream provider abstractions
//!
//! The media catalog and the language model sit behind traits so the pipeline can
//! be exercised without network access and so either backend can be swapped.
use crate::{
    error::AppResult,
    models::{ApiMediaDetails, CatalogItem, CatalogPage, MediaKind},
};

pub mod openai;
pub mod tmdb;

pub use openai::OpenAiProvider;
pub use tmdb::TmdbProvider;

/// Trait for media catalog providers
///
/// Every call maps to exactly one outbound request. Results keep the catalog's own
/// ranking order; nothing is retried or cached.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search titles of one kind by free text, optionally narrowed to a release year
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        year: Option<u32>,
        page: u32,
    ) -> AppResult<Vec<CatalogItem>>;

    /// Currently popular titles of one kind
    async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<CatalogPage>;

    /// Titles of one kind filtered by a catalog genre id
    async fn discover(&self, kind: MediaKind, genre_id: u32, page: u32) -> AppResult<CatalogPage>;

    /// Full record including credits, related titles and videos
    async fn details(&self, kind: MediaKind, id: u64) -> AppResult<ApiMediaDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for chat-completion providers that answer with a single JSON object
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one system instruction and one user message, returning the
    /// assistant's reply text untouched.
    async fn complete_json(&self, system: &str, user: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
