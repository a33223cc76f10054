use crate::models::CatalogItem;

/// Popular titles embedded per kind
pub const MAX_CONTEXT_ITEMS: usize = 10;

/// Overview characters kept per embedded title
pub const OVERVIEW_EXCERPT_CHARS: usize = 100;

/// Builds the system instruction for the recommendation model
///
/// Currently popular movies and shows are embedded as grounding context, each
/// reduced to one line so the prompt size stays bounded no matter how long the
/// catalog's overviews are.
pub fn build(popular_movies: &[CatalogItem], popular_tv_shows: &[CatalogItem]) -> String {
    format!(
        r#"You are a film expert who gives personalized movie and TV show recommendations.
Based on the user's request, recommend 5 movies and 5 TV shows that match their taste.
Take current and popular titles into account. Format your answer as a JSON object with the fields 'movies' and 'tvShows',
where every entry contains 'title', 'year', 'reason' (why you recommend it) and 'type' (movie/tv).
Write the reasons in the language of the user's request.
Here are some currently popular movies and TV shows for reference:

CURRENT MOVIES:
{}

CURRENT TV SHOWS:
{}"#,
        context_lines(popular_movies),
        context_lines(popular_tv_shows)
    )
}

fn context_lines(items: &[CatalogItem]) -> String {
    items
        .iter()
        .take(MAX_CONTEXT_ITEMS)
        .map(context_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn context_line(item: &CatalogItem) -> String {
    let excerpt: String = item
        .overview
        .as_deref()
        .unwrap_or_default()
        .chars()
        .take(OVERVIEW_EXCERPT_CHARS)
        .collect();

    format!(
        "{} ({}) - {}...",
        item.title,
        item.release_year().unwrap_or("N/A"),
        excerpt
    )
}
