use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{GeneratedRecommendation, GeneratedRecommendations, MediaKind},
    services::providers::CompletionProvider,
};

/// Items requested per kind by the prompt; longer lists are cut to this length
pub const ITEMS_PER_KIND: usize = 5;

/// Produces identifier-less recommendations from a language model
#[derive(Clone, Default)]
pub struct RecommendationGenerator {
    completion: Option<Arc<dyn CompletionProvider>>,
}

impl RecommendationGenerator {
    pub fn new(completion: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { completion }
    }

    /// Whether a model credential was configured
    pub fn is_available(&self) -> bool {
        self.completion.is_some()
    }

    /// Asks the model for recommendations matching `query`
    ///
    /// `instructions` is the system prompt built from the popular titles. Fails
    /// with `ServiceUnavailable` before touching the network when no model is
    /// configured, and with `Parse` (carrying the raw reply) when the reply is
    /// not the expected JSON object.
    pub async fn generate(
        &self,
        query: &str,
        instructions: &str,
    ) -> AppResult<GeneratedRecommendations> {
        let completion = self.completion.as_ref().ok_or_else(not_configured)?;

        let raw = completion.complete_json(instructions, query).await?;
        let generated = parse_recommendations(&raw)?;

        tracing::info!(
            movies = generated.movies.len(),
            tv_shows = generated.tv_shows.len(),
            provider = completion.name(),
            "Recommendations generated"
        );

        Ok(generated)
    }
}

pub fn not_configured() -> AppError {
    AppError::ServiceUnavailable(
        "Set OPENAI_API_KEY to enable AI recommendations".to_string(),
    )
}

/// Reads the model's reply into recommendations
///
/// Tolerates a Markdown code fence around the object. Each item's kind is taken
/// from the list it appears in.
pub fn parse_recommendations(raw: &str) -> AppResult<GeneratedRecommendations> {
    let json = strip_code_fence(raw);

    let parsed: GeneratedRecommendations = serde_json::from_str(json).map_err(|e| {
        tracing::error!(error = %e, raw = %raw, "Failed to parse model reply");
        AppError::Parse {
            message: e.to_string(),
            raw: raw.to_string(),
        }
    })?;

    Ok(GeneratedRecommendations {
        movies: normalize(parsed.movies, MediaKind::Movie),
        tv_shows: normalize(parsed.tv_shows, MediaKind::Tv),
    })
}

fn strip_code_fence(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

fn normalize(
    mut items: Vec<GeneratedRecommendation>,
    kind: MediaKind,
) -> Vec<GeneratedRecommendation> {
    if items.len() > ITEMS_PER_KIND {
        tracing::warn!(
            kind = %kind,
            returned = items.len(),
            kept = ITEMS_PER_KIND,
            "Model returned more recommendations than requested"
        );
        items.truncate(ITEMS_PER_KIND);
    } else if items.len() < ITEMS_PER_KIND {
        tracing::debug!(kind = %kind, returned = items.len(), "Model returned fewer recommendations than requested");
    }

    items
        .into_iter()
        .map(|item| GeneratedRecommendation { kind, ..item })
        .collect()
}
