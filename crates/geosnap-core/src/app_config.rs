#[derive(Clone)]
pub struct AppConfig {
    pub catalog_url: String,
    pub catalog_api_key: String,
    pub log_level: String,
    /// Photos selected per game.
    pub rounds_per_game: usize,
    /// Minimum pairwise distance between selected round photos.
    pub min_separation_km: f64,
    /// Guesses closer than this score the full `max_points`. Distinct from
    /// `min_separation_km`, which only constrains the sampler.
    pub perfect_radius_km: f64,
    pub max_points: u32,
    /// Pagination ceiling when scanning the catalog for candidates.
    pub max_pages: usize,
    pub page_size: u32,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("catalog_url", &self.catalog_url)
            .field("catalog_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("rounds_per_game", &self.rounds_per_game)
            .field("min_separation_km", &self.min_separation_km)
            .field("perfect_radius_km", &self.perfect_radius_km)
            .field("max_points", &self.max_points)
            .field("max_pages", &self.max_pages)
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
