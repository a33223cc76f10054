/// Size segment used for posters in listings and recommendations
pub const POSTER_SIZE: &str = "w500";

/// Size segment used for detail page backdrops
pub const BACKDROP_SIZE: &str = "original";

/// Builds artwork URLs from catalog path fragments
///
/// URLs take the form `{base}/{size}/{fragment}`. They are recomputed for every
/// response and never stored.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Returns `None` when the fragment is absent or blank, so callers never
    /// emit a URL pointing at nothing.
    pub fn url(&self, size: &str, path: Option<&str>) -> Option<String> {
        let fragment = path?.trim().trim_start_matches('/');
        if fragment.is_empty() {
            return None;
        }
        Some(format!("{}/{}/{}", self.base_url, size, fragment))
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.url(POSTER_SIZE, path)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.url(BACKDROP_SIZE, path)
    }
}
