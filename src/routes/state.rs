use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::AppResult,
    models::ImageUrls,
    services::{
        providers::{CatalogProvider, CompletionProvider, OpenAiProvider, TmdbProvider},
        RecommendationGenerator,
    },
};

/// Shared, read-only application state
///
/// Holds no per-request data; every request runs against its own futures.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub generator: RecommendationGenerator,
    pub images: ImageUrls,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        generator: RecommendationGenerator,
        images: ImageUrls,
    ) -> Self {
        Self {
            catalog,
            generator,
            images,
        }
    }

    /// Wires the TMDB and OpenAI providers from configuration
    ///
    /// A missing OpenAI key is not an error: the generator is left unconfigured
    /// and recommendation requests report the service as unavailable.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.http_timeout_secs);

        let catalog = TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.catalog_language.clone(),
            timeout,
        )?;

        let completion = match &config.openai_api_key {
            Some(api_key) => {
                let provider = OpenAiProvider::new(
                    api_key.clone(),
                    config.openai_api_url.clone(),
                    config.openai_model.clone(),
                    config.openai_temperature,
                    timeout,
                )?;
                Some(Arc::new(provider) as Arc<dyn CompletionProvider>)
            }
            None => None,
        };

        Ok(Self::new(
            Arc::new(catalog),
            RecommendationGenerator::new(completion),
            ImageUrls::new(config.tmdb_image_url.clone()),
        ))
    }
}
